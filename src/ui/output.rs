//! ui::output
//!
//! Diagnostic output on standard error.
//!
//! # Design
//!
//! The flow's protocol lines (prompt, error, confirmation) are written to an
//! injected writer by the engine. Everything else the program says about
//! itself goes through here, on stderr, so stdout carries only the protocol
//! and git's own output.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from the debug flag.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (always shown).
pub fn warn(message: impl Display) {
    eprintln!("warning: {}", message);
}
