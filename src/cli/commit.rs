//! cli::commit
//!
//! Wires configuration, the git CLI and the terminal into one commit flow.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, ConfigLoadResult};
use crate::engine::{AbortReason, CommitFlow, Context, FailurePolicy, FlowState};
use crate::git::{Git, GitCli};
use crate::ui::output::{self, Verbosity};

/// Run one commit flow and return the process exit status.
///
/// `input` supplies the commit message line; protocol lines go to `out`.
pub fn commit<R, W>(ctx: &Context, input: &mut R, out: &mut W) -> Result<i32>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let verbosity = Verbosity::from_flags(ctx.debug);
    let cwd = ctx
        .working_dir()
        .context("Failed to determine working directory")?;

    let git_dir = inspect_repository(&cwd, verbosity);

    let ConfigLoadResult { config, warnings } =
        Config::load(git_dir.as_deref()).context("Failed to load configuration")?;
    for warning in &warnings {
        output::warn(format!("{} ({})", warning.message, warning.path.display()));
    }
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.repo_config_loaded_from() {
        output::debug(format!("repo config: {}", path.display()), verbosity);
    }

    let policy = FailurePolicy::from_strict(ctx.strict || config.strict());
    output::debug(format!("failure policy: {:?}", policy), verbosity);

    let mut vcs = GitCli::new(config.git_program(), &cwd)
        .verify_hooks(config.verify_hooks())
        .verbosity(verbosity);

    let outcome = CommitFlow::new(&mut vcs, policy)
        .verbosity(verbosity)
        .run(input, out)?;

    if let FlowState::Aborted(AbortReason::StepFailed(step)) = &outcome.state {
        output::error(format!("{}; remaining steps skipped", step));
    } else {
        for step in outcome.failed_steps() {
            output::debug(format!("unchecked failure: {}", step), verbosity);
        }
    }

    Ok(outcome.exit_code())
}

/// Report what git2 can see about the repository, in debug mode.
///
/// Returns the git directory when `cwd` is inside a repository. Failure to
/// open one is not an error here; the stage step will surface it.
fn inspect_repository(cwd: &std::path::Path, verbosity: Verbosity) -> Option<PathBuf> {
    let git = match Git::open(cwd) {
        Ok(git) => git,
        Err(e) => {
            output::debug(e, verbosity);
            return None;
        }
    };

    let info = match git.info() {
        Ok(info) => info,
        Err(e) => {
            output::debug(e, verbosity);
            return None;
        }
    };

    if verbosity == Verbosity::Debug {
        output::debug(format!("work dir: {}", info.work_dir.display()), verbosity);

        match git.current_branch() {
            Ok(Some(branch)) => output::debug(format!("branch: {}", branch), verbosity),
            Ok(None) => output::debug("branch: (detached or unborn)", verbosity),
            Err(e) => output::debug(e, verbosity),
        }

        match git.default_remote() {
            Ok(Some(remote)) => output::debug(format!("remote: {}", remote), verbosity),
            Ok(None) => output::debug("remote: (none configured)", verbosity),
            Err(e) => output::debug(e, verbosity),
        }

        if let Some(op) = git.operation_in_progress() {
            output::debug(format!("{} in progress", op), verbosity);
        }

        match git.worktree_status() {
            Ok(status) => output::debug(format!("worktree: {}", status), verbosity),
            Err(e) => output::debug(e, verbosity),
        }
    }

    Some(info.git_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn outside_repository_has_no_git_dir() {
        let temp = TempDir::new().unwrap();
        assert!(inspect_repository(temp.path(), Verbosity::Normal).is_none());
    }

    #[test]
    fn inside_repository_finds_git_dir_from_subdir() {
        let temp = TempDir::new().unwrap();
        let status = std::process::Command::new("git")
            .args(["init", "-q"])
            .current_dir(temp.path())
            .status()
            .expect("git init failed");
        assert!(status.success());
        let sub = temp.path().join("nested/deeper");
        std::fs::create_dir_all(&sub).unwrap();

        let git_dir = inspect_repository(&sub, Verbosity::Debug).unwrap();
        assert!(git_dir.ends_with(".git"));
    }
}
