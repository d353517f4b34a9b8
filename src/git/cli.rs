//! git::cli
//!
//! [`VersionControl`] backed by the git program.
//!
//! Each step runs `git` as a child process with inherited standard streams,
//! so the operator sees git's own progress and error output and any
//! credential prompts work as usual. The child's exit status is recorded,
//! never interpreted.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use super::traits::{Step, StepOutcome, VersionControl};
use crate::core::types::CommitMessage;
use crate::ui::output::{self, Verbosity};

/// Runs stage/commit/push through the git command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Executable name or path
    program: String,
    /// Directory the child processes run in
    cwd: PathBuf,
    /// When false, commit runs with `--no-verify`
    verify_hooks: bool,
    verbosity: Verbosity,
}

impl GitCli {
    /// Create a runner for `program` in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
            verify_hooks: true,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set whether commit hooks run.
    pub fn verify_hooks(mut self, verify: bool) -> Self {
        self.verify_hooks = verify;
        self
    }

    /// Set output verbosity for command tracing.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Arguments for the commit step.
    fn commit_args<'a>(&self, message: &'a CommitMessage) -> Vec<&'a OsStr> {
        let mut args = vec![OsStr::new("commit")];
        if !self.verify_hooks {
            args.push(OsStr::new("--no-verify"));
        }
        args.push(OsStr::new("-m"));
        args.push(message.as_os_str());
        args
    }

    fn run(&self, step: Step, args: &[&OsStr]) -> StepOutcome {
        let shown: Vec<_> = args.iter().map(|arg| arg.to_string_lossy()).collect();
        output::debug(
            format!("running: {} {}", self.program, shown.join(" ")),
            self.verbosity,
        );

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.cwd)
            .status();

        let outcome = match status {
            Ok(status) => StepOutcome::exited(step, status.code()),
            Err(e) => StepOutcome::not_run(step, format!("{}: {}", self.program, e)),
        };

        output::debug(&outcome, self.verbosity);
        outcome
    }
}

impl VersionControl for GitCli {
    fn stage_all(&mut self) -> StepOutcome {
        self.run(Step::Stage, &[OsStr::new("add"), OsStr::new("-A")])
    }

    fn commit(&mut self, message: &CommitMessage) -> StepOutcome {
        let args = self.commit_args(message);
        self.run(Step::Commit, &args)
    }

    fn push(&mut self) -> StepOutcome {
        self.run(Step::Push, &[OsStr::new("push")])
    }
}
