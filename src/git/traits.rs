//! git::traits
//!
//! The version-control seam used by the commit flow.
//!
//! # Design
//!
//! Each operation reports a [`StepOutcome`] instead of a `Result`. A failed
//! stage, commit or push is ordinary data here; whether it stops the flow is
//! decided by the caller's failure policy, not by the implementation.

use crate::core::types::CommitMessage;

/// One of the three external operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Stage every change in the working tree.
    Stage,
    /// Record the staged changes as a commit.
    Commit,
    /// Transmit history to the remote.
    Push,
}

impl Step {
    /// Get the step name as shown to the operator.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Push => "push",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Which step this is.
    pub step: Step,
    /// Exit code of the tool, `None` if it could not be spawned or was
    /// killed by a signal.
    pub code: Option<i32>,
    /// Failure detail when the tool could not be run at all.
    pub detail: Option<String>,
}

impl StepOutcome {
    /// A step whose tool exited with `code`.
    pub fn exited(step: Step, code: Option<i32>) -> Self {
        Self {
            step,
            code,
            detail: None,
        }
    }

    /// A step whose tool never ran.
    pub fn not_run(step: Step, detail: impl Into<String>) -> Self {
        Self {
            step,
            code: None,
            detail: Some(detail.into()),
        }
    }

    /// A successful step (exit code 0).
    pub fn ok(step: Step) -> Self {
        Self::exited(step, Some(0))
    }

    /// Check if the tool exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to hand back to the shell for this outcome.
    ///
    /// Tools that never ran or died from a signal map to 1.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) => code,
            None => 1,
        }
    }
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.detail) {
            (_, Some(detail)) => write!(f, "{} could not run: {}", self.step, detail),
            (Some(code), None) => write!(f, "{} exited with status {}", self.step, code),
            (None, None) => write!(f, "{} terminated by signal", self.step),
        }
    }
}

/// Operations the commit flow needs from a version-control tool.
pub trait VersionControl {
    /// Stage every change in the working tree (`git add -A`).
    fn stage_all(&mut self) -> StepOutcome;

    /// Commit the staged changes with `message` as the log entry.
    fn commit(&mut self, message: &CommitMessage) -> StepOutcome;

    /// Push committed history to the configured remote.
    fn push(&mut self) -> StepOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success() {
        assert!(StepOutcome::ok(Step::Push).success());
        assert!(!StepOutcome::exited(Step::Push, Some(128)).success());
        assert!(!StepOutcome::exited(Step::Push, None).success());
        assert!(!StepOutcome::not_run(Step::Stage, "no git").success());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(StepOutcome::exited(Step::Commit, Some(128)).exit_code(), 128);
        assert_eq!(StepOutcome::exited(Step::Commit, None).exit_code(), 1);
        assert_eq!(StepOutcome::not_run(Step::Commit, "x").exit_code(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(
            StepOutcome::exited(Step::Commit, Some(1)).to_string(),
            "commit exited with status 1"
        );
        assert_eq!(
            StepOutcome::not_run(Step::Stage, "program not found").to_string(),
            "stage could not run: program not found"
        );
        assert_eq!(
            StepOutcome::exited(Step::Push, None).to_string(),
            "push terminated by signal"
        );
    }
}
