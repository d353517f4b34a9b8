//! git::mock
//!
//! Mock version-control implementation for deterministic testing.
//!
//! # Design
//!
//! `MockVcs` records every call in order and answers with a configurable
//! exit code per step. Clones share state, so a test can hand one clone to
//! the flow and inspect the other afterwards.
//!
//! # Example
//!
//! ```
//! use commitflow::core::types::CommitMessage;
//! use commitflow::git::mock::{MockOperation, MockVcs};
//! use commitflow::git::{Step, VersionControl};
//!
//! let mut vcs = MockVcs::new().fail_with(Step::Push, 128);
//!
//! assert!(vcs.stage_all().success());
//! assert!(vcs.commit(&CommitMessage::new("fix bug").unwrap()).success());
//! assert_eq!(vcs.push().code, Some(128));
//!
//! assert_eq!(
//!     vcs.operations(),
//!     vec![
//!         MockOperation::StageAll,
//!         MockOperation::Commit("fix bug".into()),
//!         MockOperation::Push,
//!     ]
//! );
//! ```

use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::{Arc, Mutex};

use super::traits::{Step, StepOutcome, VersionControl};
use crate::core::types::CommitMessage;

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    /// `stage_all` was called.
    StageAll,
    /// `commit` was called with this message.
    Commit(OsString),
    /// `push` was called.
    Push,
}

/// Mock version control for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockVcs {
    inner: Arc<Mutex<MockVcsInner>>,
}

#[derive(Debug, Default)]
struct MockVcsInner {
    /// Exit codes for steps configured to fail.
    failures: HashMap<Step, i32>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

impl MockVcs {
    /// Create a mock where every step succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `step` exit with `code`.
    pub fn fail_with(self, step: Step, code: i32) -> Self {
        self.lock().failures.insert(step, code);
        self
    }

    /// Get the operations recorded so far.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    /// Get the messages passed to `commit`.
    pub fn commits(&self) -> Vec<OsString> {
        self.lock()
            .operations
            .iter()
            .filter_map(|op| match op {
                MockOperation::Commit(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockVcsInner> {
        // A poisoned lock only means another test thread panicked.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn record(&self, op: MockOperation, step: Step) -> StepOutcome {
        let mut inner = self.lock();
        inner.operations.push(op);
        match inner.failures.get(&step) {
            Some(&code) => StepOutcome::exited(step, Some(code)),
            None => StepOutcome::ok(step),
        }
    }
}

impl VersionControl for MockVcs {
    fn stage_all(&mut self) -> StepOutcome {
        self.record(MockOperation::StageAll, Step::Stage)
    }

    fn commit(&mut self, message: &CommitMessage) -> StepOutcome {
        self.record(MockOperation::Commit(message.as_os_str().to_os_string()), Step::Commit)
    }

    fn push(&mut self) -> StepOutcome {
        self.record(MockOperation::Push, Step::Push)
    }
}
