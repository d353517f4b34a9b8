//! commitflow - stage, commit and push in one interactive step
//!
//! Running `commitflow` stages every change in the working tree, asks for a
//! commit message, refuses an empty one, commits, pushes, and confirms.
//!
//! # Architecture
//!
//! - [`cli`] - Flag parsing; binds the flow to the terminal and git
//! - [`engine`] - The commit flow state machine and failure policy
//! - [`core`] - Domain types and configuration
//! - [`git`] - Repository inspection (git2) and the git program runner
//! - [`ui`] - Prompting and diagnostic output
//!
//! # Behavior
//!
//! 1. The message is the first line of standard input, minus its line
//!    terminator. Whitespace-only messages are accepted.
//! 2. An empty message prints a fixed error and exits with status 1.
//! 3. By default the results of stage, commit and push are not checked;
//!    `--strict` stops at the first failure instead.

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
