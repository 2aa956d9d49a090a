//! Main entry point for the treedit CLI.
//!
//! The CLI is a host for the treedit library: it reads snapshots as JSON,
//! renders them as text, and reconciles edited text back into a tree:
//! - `format`: Render a snapshot
//! - `parse`: Parse edited text against a snapshot
//! - `reconcile`: Parse, check for conflicts and emit the hand-off document

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::CheckRoot(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Analyze(cmd) => cmd.execute(&global),
        cli::Command::Reconcile(cmd) => cmd.execute(&global),
        cli::Command::Verify(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
