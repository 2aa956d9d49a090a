//! Conflict analysis of a tree document.

use crate::error::CliError;
use crate::utils::{
    load_configuration, logger_for, print_document, read_tree, report_format, GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;
use treedit::analyze;
use treedit::config::OutputFormat;
use treedit::output::create_formatter;

/// Report duplicate files and folder merges in a tree.
#[derive(Args)]
pub struct AnalyzeCommand {
    /// Tree JSON file, usually the output of `treedit parse`
    #[arg(value_name = "TREE")]
    pub tree: PathBuf,

    /// Report format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl AnalyzeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = logger_for(global, &config);

        let tree = read_tree(&self.tree)?;
        let report = analyze(&tree);
        logger.debug(&format!(
            "{} duplicate file groups, {} folder merges",
            report.file_errors.len(),
            report.folder_merges.len()
        ));

        let formatter = create_formatter(report_format(self.format, &config));
        print_document(&formatter.format_conflicts(&report)?)?;

        if !report.valid {
            return Err(CliError::SemanticFailure(
                "Tree has duplicate files".to_string(),
            ));
        }
        Ok(())
    }
}
