//! Parse edited text against a snapshot.

use crate::error::CliError;
use crate::utils::{
    load_configuration, logger_for, print_document, read_input, read_snapshot, report_format,
    GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;
use treedit::config::OutputFormat;
use treedit::output::create_formatter;
use treedit::text::parse_with_sink;
use treedit::Error;

/// Parse edited text against a snapshot.
#[derive(Args)]
pub struct ParseCommand {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Edited tree text
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Print a summary of moves and diagnostics instead of the tree
    #[arg(long)]
    pub report: bool,

    /// Format of the summary printed with --report
    #[arg(long, value_name = "FORMAT", requires = "report")]
    pub format: Option<OutputFormat>,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = logger_for(global, &config);

        let snapshot = read_snapshot(&self.snapshot)?;
        let text = read_input(&self.text)?;

        let parsed = parse_with_sink(&text, &snapshot, &logger).ok_or(Error::EmptyText)?;
        logger.info(&format!(
            "Parsed {} nodes, {} moved or renamed",
            parsed.root.node_count(),
            parsed.moves().len()
        ));

        if self.report {
            let formatter = create_formatter(report_format(self.format, &config));
            return print_document(&formatter.format_parse_summary(&parsed)?);
        }

        print_document(&parsed.root.to_json_pretty()?)
    }
}
