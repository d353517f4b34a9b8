//! cli
//!
//! Command-line interface layer for commitflow.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Bind the flow to the real terminal and the git program
//!
//! The flow itself lives in [`crate::engine`]; this layer only decides
//! where input comes from and where output goes.

pub mod args;
pub mod commit;

pub use args::Cli;

use crate::engine;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the process
/// exit status.
pub fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    let ctx = engine::Context {
        cwd: cli.cwd,
        debug: cli.debug,
        strict: cli.strict,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    commit::commit(&ctx, &mut stdin.lock(), &mut stdout.lock())
}
