//! core
//!
//! Core domain types and configuration for commitflow.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CommitMessage
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod types;
