//! engine
//!
//! Runs the commit flow against a repository.
//!
//! # Lifecycle
//!
//! ```text
//! Stage all -> Prompt -> Validate -> Commit -> Push -> Report
//! ```
//!
//! The only unconditional branch is the validation gate: an empty message
//! ends the flow with exit status 1. What happens when stage, commit or push
//! fail is governed by [`FailurePolicy`]. The default, [`FailurePolicy::Continue`],
//! runs every step regardless of earlier results.
//!
//! # Example
//!
//! ```
//! use commitflow::engine::{CommitFlow, FailurePolicy, FlowState};
//! use commitflow::git::mock::MockVcs;
//!
//! let mut vcs = MockVcs::new();
//! let mut out = Vec::new();
//! let outcome = CommitFlow::new(&mut vcs, FailurePolicy::Continue)
//!     .run(&mut "fix bug\n".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(outcome.state, FlowState::Done);
//! assert!(String::from_utf8(out).unwrap().ends_with("message: fix bug\n"));
//! ```

pub mod flow;

pub use flow::{AbortReason, CommitFlow, FlowError, FlowOutcome, FlowState};

use std::path::PathBuf;

/// How the flow treats a failed stage, commit or push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and run the remaining steps.
    #[default]
    Continue,
    /// Stop at the first failure and exit with its status.
    Abort,
}

impl FailurePolicy {
    /// Policy for the `strict` setting.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        }
    }
}

/// Execution context for a run.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Strict mode requested on the command line.
    pub strict: bool,
}

impl Context {
    /// Resolve the directory git runs in.
    pub fn working_dir(&self) -> std::io::Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
