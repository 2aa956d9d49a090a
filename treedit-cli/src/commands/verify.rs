//! Round-trip self-check.

use crate::error::CliError;
use crate::utils::{
    load_configuration, print_document, read_input, read_snapshot, report_format, GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;
use treedit::config::OutputFormat;
use treedit::output::create_formatter;
use treedit::{format_tree, verify_round_trip};

/// Check that a text parses back into the snapshot's shape.
#[derive(Args)]
pub struct VerifyCommand {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Text to check instead of the snapshot's own rendering
    #[arg(long, value_name = "TEXT")]
    pub text: Option<PathBuf>,

    /// Report format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl VerifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let snapshot = read_snapshot(&self.snapshot)?;

        let text = match self.text {
            Some(ref path) => read_input(path)?,
            None => format_tree(&snapshot),
        };

        let report = verify_round_trip(&text, &snapshot);
        let formatter = create_formatter(report_format(self.format, &config));
        print_document(&formatter.format_round_trip(&report)?)?;

        if !report.valid {
            return Err(CliError::SemanticFailure(
                "Round trip check failed".to_string(),
            ));
        }
        Ok(())
    }
}
