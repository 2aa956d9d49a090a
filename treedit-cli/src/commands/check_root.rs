//! Detect and undo edits to the root line.

use crate::error::CliError;
use crate::utils::{
    load_configuration, logger_for, print_document, read_input, read_snapshot, report_format,
    GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;
use treedit::config::OutputFormat;
use treedit::output::create_formatter;
use treedit::{check_root_name_change, restore_root_line};

/// Check whether the root line of edited text was changed.
#[derive(Args)]
pub struct CheckRootCommand {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Edited tree text
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Print the text with the original root line restored
    #[arg(long)]
    pub fix: bool,

    /// Report format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl CheckRootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = logger_for(global, &config);

        let snapshot = read_snapshot(&self.snapshot)?;
        let text = read_input(&self.text)?;
        let change = check_root_name_change(&text, &snapshot);

        if self.fix {
            if change.changed {
                logger.warn(&format!(
                    "Root name cannot be changed, restored '{}'",
                    change.original_name
                ));
            }
            return print_document(&restore_root_line(&text, &snapshot));
        }

        let formatter = create_formatter(report_format(self.format, &config));
        print_document(&formatter.format_root_change(&change)?)?;

        if change.changed {
            return Err(CliError::SemanticFailure(format!(
                "Root line changed from '{}' to '{}'",
                change.original_name, change.new_name
            )));
        }
        Ok(())
    }
}
