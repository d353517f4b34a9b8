//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive line input
//! - [`output`] - Diagnostics on stderr (debug, warnings, errors)

pub mod output;
pub mod prompts;
