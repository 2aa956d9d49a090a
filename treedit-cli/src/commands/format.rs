//! Render a snapshot as tree text.

use crate::error::CliError;
use crate::utils::{print_document, read_snapshot, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use treedit::format_tree;

/// Render a snapshot as tree text.
#[derive(Args)]
pub struct FormatCommand {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

impl FormatCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let snapshot = read_snapshot(&self.snapshot)?;
        print_document(&format_tree(&snapshot))
    }
}
