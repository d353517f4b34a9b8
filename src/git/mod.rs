//! git
//!
//! Every interaction with Git.
//!
//! # Architecture
//!
//! Two doorways, split by whether the repository changes:
//!
//! - [`interface`] - read-only inspection through `git2` (discovery, status,
//!   branch, remote). No other module imports `git2`.
//! - [`cli`] - the mutating steps (stage, commit, push) through the git
//!   program, behind the [`VersionControl`] trait from [`traits`].
//!
//! [`mock`] provides an in-memory [`VersionControl`] for tests.
//!
//! # Example
//!
//! ```ignore
//! use commitflow::git::{GitCli, VersionControl};
//!
//! let mut vcs = GitCli::new("git", ".");
//! let outcome = vcs.stage_all();
//! if !outcome.success() {
//!     eprintln!("{}", outcome);
//! }
//! ```

mod cli;
mod interface;
pub mod mock;
pub mod traits;

pub use cli::GitCli;
pub use interface::{Git, GitError, RepoInfo, WorktreeStatus};
pub use traits::{Step, StepOutcome, VersionControl};
