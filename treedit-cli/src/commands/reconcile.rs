//! The full edit flow: root guard, parse, conflict checks, hand-off.
//!
//! The hand-off document goes to stdout only when nothing blocks it. Every
//! refusal prints its report to stderr and exits with a semantic failure.

use crate::error::CliError;
use crate::utils::{
    load_configuration, logger_for, print_document, read_input, read_snapshot, report_format,
    GlobalOptions,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use treedit::config::OutputFormat;
use treedit::output::create_formatter;
use treedit::text::parse_with_sink;
use treedit::{analyze, check_root_name_change, restore_root_line, Error, TreeNode};

/// Parse, check and produce the hand-off document.
#[derive(Args)]
pub struct ReconcileCommand {
    /// Snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Edited tree text
    #[arg(value_name = "TEXT")]
    pub text: PathBuf,

    /// Accept folder merges without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Format of reports printed when reconciliation is refused
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// What the executor receives.
#[derive(Serialize)]
struct HandOff<'a> {
    original: &'a TreeNode,
    modified: &'a TreeNode,
}

impl ReconcileCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = logger_for(global, &config);
        let formatter = create_formatter(report_format(self.format, &config));

        let snapshot = read_snapshot(&self.snapshot)?;
        let mut text = read_input(&self.text)?;

        let change = check_root_name_change(&text, &snapshot);
        if change.changed {
            logger.warn(&formatter.format_root_change(&change)?);
            text = restore_root_line(&text, &snapshot);
        }

        let parsed = parse_with_sink(&text, &snapshot, &logger).ok_or(Error::EmptyText)?;

        if config.strict_identity() && !parsed.ambiguous().is_empty() {
            eprintln!("{}", formatter.format_parse_summary(&parsed)?);
            return Err(CliError::SemanticFailure(format!(
                "Refusing to reconcile: {} identities were guessed",
                parsed.ambiguous().len()
            )));
        }

        let report = analyze(&parsed.root);
        if !report.valid {
            eprintln!("{}", formatter.format_conflicts(&report)?);
            return Err(CliError::SemanticFailure(
                "Cannot apply changes: duplicate files".to_string(),
            ));
        }

        if report.needs_confirmation() {
            if !(self.yes || config.confirm_merges()) {
                eprintln!("{}", formatter.format_conflicts(&report)?);
                return Err(CliError::SemanticFailure(
                    "Folder merges need confirmation (pass --yes)".to_string(),
                ));
            }
            logger.info(&format!(
                "Accepted {} folder merges",
                report.folder_merges.len()
            ));
        }

        logger.info(&format!(
            "{} nodes moved or renamed",
            parsed.moves().len()
        ));

        let hand_off = HandOff {
            original: &snapshot,
            modified: &parsed.root,
        };
        let json = serde_json::to_string_pretty(&hand_off).map_err(Error::from)?;
        print_document(&json)
    }
}
