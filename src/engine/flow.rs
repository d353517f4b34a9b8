//! engine::flow
//!
//! The commit flow: stage → prompt → validate → commit → push → report.
//!
//! # States
//!
//! ```text
//! AwaitingInput ──(empty message)──────────────▶ Aborted(EmptyMessage)
//!       │
//!       ├──(step failed, Abort policy)─────────▶ Aborted(StepFailed)
//!       │
//!       └──(commit, push, report)──────────────▶ Done
//! ```
//!
//! Under [`FailurePolicy::Continue`] the only branch is the empty-message
//! gate; stage, commit and push results are recorded and otherwise ignored.

use std::io::{BufRead, Write};

use thiserror::Error;

use super::FailurePolicy;
use crate::core::types::{CommitMessage, TypeError};
use crate::git::{StepOutcome, VersionControl};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{self, PromptError};

/// Prompt written before reading the message.
pub const PROMPT: &str = "Enter your commit message:";

/// Line written when the operator enters nothing.
pub const EMPTY_MESSAGE_ERROR: &str = "Error: Commit message cannot be empty. Commit aborted.";

/// Exit status for an empty message.
pub const EMPTY_MESSAGE_EXIT_CODE: i32 = 1;

/// Text before the message on the confirmation line.
pub const SUCCESS_REPORT_PREFIX: &str = "Commit successfully pushed with message: ";

/// Confirmation line written after push, without its newline.
///
/// The message is echoed as the bytes that were typed.
pub fn success_report(message: &CommitMessage) -> Vec<u8> {
    let mut line = SUCCESS_REPORT_PREFIX.as_bytes().to_vec();
    line.extend_from_slice(&message.as_bytes());
    line
}

/// Errors that stop the flow from talking to the operator.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Reading the message or writing the prompt failed.
    #[error("failed to prompt for commit message: {0}")]
    Prompt(#[from] PromptError),

    /// Writing a result line failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Why the flow stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The operator entered an empty message.
    EmptyMessage,
    /// A step failed under [`FailurePolicy::Abort`].
    StepFailed(StepOutcome),
}

/// Where the flow is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Initial state, before the message is validated.
    AwaitingInput,
    /// Commit, push and report have run.
    Done,
    /// Terminated before the report.
    Aborted(AbortReason),
}

/// Result of one invocation.
#[derive(Debug, Clone)]
pub struct FlowOutcome {
    /// Terminal state reached.
    pub state: FlowState,
    /// The validated message, if one was entered.
    pub message: Option<CommitMessage>,
    /// Every step that ran, in order.
    pub steps: Vec<StepOutcome>,
}

impl FlowOutcome {
    /// Process exit status for this outcome.
    ///
    /// `Done` is 0 even when commit or push failed under the continue policy;
    /// their statuses are unchecked.
    pub fn exit_code(&self) -> i32 {
        match &self.state {
            FlowState::Done | FlowState::AwaitingInput => 0,
            FlowState::Aborted(AbortReason::EmptyMessage) => EMPTY_MESSAGE_EXIT_CODE,
            FlowState::Aborted(AbortReason::StepFailed(step)) => step.exit_code(),
        }
    }

    /// Steps that did not exit cleanly.
    pub fn failed_steps(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.success())
    }
}

/// One commit flow over a version-control implementation.
#[derive(Debug)]
pub struct CommitFlow<'a, V: VersionControl + ?Sized> {
    vcs: &'a mut V,
    policy: FailurePolicy,
    verbosity: Verbosity,
    state: FlowState,
    steps: Vec<StepOutcome>,
}

impl<'a, V: VersionControl + ?Sized> CommitFlow<'a, V> {
    /// Create a flow in the `AwaitingInput` state.
    pub fn new(vcs: &'a mut V, policy: FailurePolicy) -> Self {
        Self {
            vcs,
            policy,
            verbosity: Verbosity::Normal,
            state: FlowState::AwaitingInput,
            steps: Vec::new(),
        }
    }

    /// Set verbosity for debug tracing.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Run the flow to a terminal state.
    ///
    /// Reads one line from `input` as the message; protocol lines go to `out`.
    pub fn run<R, W>(mut self, input: &mut R, out: &mut W) -> Result<FlowOutcome, FlowError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let staged = self.vcs.stage_all();
        if self.record(staged) {
            return Ok(self.finish(None));
        }

        let raw = prompts::input(PROMPT, input, out)?;

        let message = match CommitMessage::from_bytes(raw) {
            Ok(message) => message,
            Err(TypeError::EmptyCommitMessage) => {
                writeln!(out, "{}", EMPTY_MESSAGE_ERROR)?;
                out.flush()?;
                self.state = FlowState::Aborted(AbortReason::EmptyMessage);
                return Ok(self.finish(None));
            }
        };

        let committed = self.vcs.commit(&message);
        if self.record(committed) {
            return Ok(self.finish(Some(message)));
        }

        let pushed = self.vcs.push();
        if self.record(pushed) {
            return Ok(self.finish(Some(message)));
        }

        out.write_all(&success_report(&message))?;
        out.write_all(b"\n")?;
        out.flush()?;
        self.state = FlowState::Done;

        Ok(self.finish(Some(message)))
    }

    /// Record a step outcome. Returns true if the flow must stop here.
    fn record(&mut self, outcome: StepOutcome) -> bool {
        let halt = !outcome.success() && self.policy == FailurePolicy::Abort;
        if !outcome.success() {
            output::debug(format!("{} (continuing: {})", outcome, !halt), self.verbosity);
        }
        if halt {
            self.state = FlowState::Aborted(AbortReason::StepFailed(outcome.clone()));
        }
        self.steps.push(outcome);
        halt
    }

    fn finish(self, message: Option<CommitMessage>) -> FlowOutcome {
        FlowOutcome {
            state: self.state,
            message,
            steps: self.steps,
        }
    }
}
