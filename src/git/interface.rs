//! git::interface
//!
//! Read-only repository inspection using git2.
//!
//! commitflow never mutates the repository through git2. Staging, committing
//! and pushing go through the git program (see [`super::cli`]) so that hooks,
//! credential helpers and the operator's git configuration apply exactly as
//! they would on the command line. This module only answers questions about
//! the repository for diagnostics and for locating repo-scoped config.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::Internal`]: Anything else git2 reports

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git inspection.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Information about a Git repository.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Path to .git directory
    pub git_dir: PathBuf,
    /// Path to working directory
    pub work_dir: PathBuf,
}

/// Summary of working tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    /// Number of staged changes
    pub staged: usize,
    /// Number of unstaged changes to tracked files
    pub unstaged: usize,
    /// Number of untracked files
    pub untracked: usize,
    /// Whether there are unresolved conflicts
    pub has_conflicts: bool,
}

impl std::fmt::Display for WorktreeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} staged, {} unstaged, {} untracked",
            self.staged, self.unstaged, self.untracked
        )?;
        if self.has_conflicts {
            write!(f, ", conflicts present")?;
        }
        Ok(())
    }
}

/// Read-only view of a repository.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository information (git_dir and work_dir paths).
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo { git_dir, work_dir })
    }

    /// Describe any in-progress operation (merge, rebase, ...).
    ///
    /// Returns `None` when the repository is clean.
    pub fn operation_in_progress(&self) -> Option<&'static str> {
        match self.repo.state() {
            git2::RepositoryState::Clean => None,
            git2::RepositoryState::Merge => Some("merge"),
            git2::RepositoryState::Revert | git2::RepositoryState::RevertSequence => {
                Some("revert")
            }
            git2::RepositoryState::CherryPick | git2::RepositoryState::CherryPickSequence => {
                Some("cherry-pick")
            }
            git2::RepositoryState::Bisect => Some("bisect"),
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge => Some("rebase"),
            git2::RepositoryState::ApplyMailbox | git2::RepositoryState::ApplyMailboxOrRebase => {
                Some("apply-mailbox")
            }
        }
    }

    /// Get working tree status summary, untracked files included.
    pub fn worktree_status(&self) -> Result<WorktreeStatus, GitError> {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;

        let mut result = WorktreeStatus::default();

        for entry in statuses.iter() {
            let status = entry.status();

            if status.is_conflicted() {
                result.has_conflicts = true;
            }

            if status.is_index_new()
                || status.is_index_modified()
                || status.is_index_deleted()
                || status.is_index_renamed()
                || status.is_index_typechange()
            {
                result.staged += 1;
            }

            if status.is_wt_modified()
                || status.is_wt_deleted()
                || status.is_wt_renamed()
                || status.is_wt_typechange()
            {
                result.unstaged += 1;
            }

            if status.is_wt_new() {
                result.untracked += 1;
            }
        }

        Ok(result)
    }

    /// Get the current branch name, if on a branch.
    ///
    /// Returns `None` if HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            return Ok(head.shorthand().map(String::from));
        }

        Ok(None)
    }

    /// Get the remote `git push` would most likely use.
    ///
    /// Prefers the current branch's configured remote, then "origin", then
    /// the first remote. Returns `None` if the repository has no remotes.
    pub fn default_remote(&self) -> Result<Option<String>, GitError> {
        if let Some(branch) = self.current_branch()? {
            let key = format!("branch.{}.remote", branch);
            if let Ok(config) = self.repo.config() {
                if let Ok(name) = config.get_string(&key) {
                    return Ok(Some(name));
                }
            }
        }

        let remotes = self.repo.remotes()?;

        if remotes.iter().flatten().any(|name| name == "origin") {
            return Ok(Some("origin".to_string()));
        }

        Ok(remotes.iter().flatten().next().map(String::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod git_error {
        use super::*;

        #[test]
        fn error_display_formatting() {
            let err = GitError::NotARepo {
                path: PathBuf::from("/tmp/x"),
            };
            assert_eq!(err.to_string(), "not a git repository: /tmp/x");
            assert_eq!(
                GitError::BareRepo.to_string(),
                "bare repository not supported"
            );
        }
    }

    mod worktree_status {
        use super::*;

        #[test]
        fn display_without_conflicts() {
            assert_eq!(
                WorktreeStatus::default().to_string(),
                "0 staged, 0 unstaged, 0 untracked"
            );
        }

        #[test]
        fn display() {
            let status = WorktreeStatus {
                staged: 1,
                unstaged: 2,
                untracked: 3,
                has_conflicts: true,
            };
            assert_eq!(
                status.to_string(),
                "1 staged, 2 unstaged, 3 untracked, conflicts present"
            );
        }
    }

    mod open {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn outside_repo_is_not_a_repo() {
            let temp = TempDir::new().unwrap();
            let err = Git::open(temp.path()).unwrap_err();
            assert!(matches!(err, GitError::NotARepo { .. }));
        }

        #[test]
        fn fresh_repo_has_no_branch_or_remote() {
            let temp = TempDir::new().unwrap();
            git2::Repository::init(temp.path()).unwrap();
            std::fs::write(temp.path().join("a.txt"), "a").unwrap();

            let git = Git::open(temp.path()).unwrap();
            assert_eq!(git.current_branch().unwrap(), None);
            assert_eq!(git.default_remote().unwrap(), None);
            assert_eq!(git.operation_in_progress(), None);

            let status = git.worktree_status().unwrap();
            assert_eq!(status.untracked, 1);
            assert_eq!(status.staged, 0);
        }

        #[test]
        fn origin_preferred() {
            let temp = TempDir::new().unwrap();
            let repo = git2::Repository::init(temp.path()).unwrap();
            repo.remote("backup", "https://example.com/b.git").unwrap();
            repo.remote("origin", "https://example.com/o.git").unwrap();

            let git = Git::open(temp.path()).unwrap();
            assert_eq!(git.default_remote().unwrap(), Some("origin".to_string()));
        }
    }
}
