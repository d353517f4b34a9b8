//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! Every flag is optional; a bare `commitflow` runs the flow with the
//! defaults from configuration.
//!
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Print diagnostics on stderr
//! - `--strict`: Stop at the first failed git step

use clap::Parser;
use std::path::PathBuf;

/// Stage everything, ask for a commit message, commit and push.
#[derive(Parser, Debug)]
#[command(name = "commitflow")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Stage, commit and push in the current repository
    commitflow

    # Same, for another checkout
    commitflow --cwd ../other-repo

    # Do not commit or push if an earlier git step failed
    commitflow --strict

CONFIGURATION:
    Global: $COMMITFLOW_CONFIG, $XDG_CONFIG_HOME/commitflow/config.toml
            or ~/.commitflow/config.toml
    Repo:   .git/commitflow/config.toml")]
pub struct Cli {
    /// Run as if commitflow was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Stop at the first failed stage, commit or push
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_default_flow() {
        let cli = Cli::try_parse_from(["commitflow"]).unwrap();
        assert!(cli.cwd.is_none());
        assert!(!cli.debug);
        assert!(!cli.strict);
    }

    #[test]
    fn all_flags() {
        let cli =
            Cli::try_parse_from(["commitflow", "--cwd", "/repo", "--debug", "--strict"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/repo")));
        assert!(cli.debug);
        assert!(cli.strict);
    }

    #[test]
    fn positional_message_rejected() {
        assert!(Cli::try_parse_from(["commitflow", "fix bug"]).is_err());
    }
}
