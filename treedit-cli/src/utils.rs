//! Utility functions for CLI operations.
//!
//! Input files are read once per invocation: a snapshot is decoded and
//! checked before any text is parsed against it.

use crate::error::CliError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use treedit::config::OutputFormat;
use treedit::{Config, ConfigBuilder, Logger, TreeNode};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load the effective configuration for this invocation.
///
/// The working directory decides which project `treedit.yaml` applies; an
/// explicit `--config` file is layered above it.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Create the logger for this invocation.
///
/// `--verbose` and `--quiet` win over the configured `log_mode`, which
/// already includes `TREEDIT_LOG_MODE`.
pub fn logger_for(global: &GlobalOptions, config: &Config) -> Logger {
    Logger::resolve(global.verbose, global.quiet, config.log_mode.as_deref())
}

/// Pick the report format: an explicit flag, then configuration.
pub fn report_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output_format())
}

/// Read a text file, mapping a missing file to an argument error.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and validate a snapshot JSON file.
pub fn read_snapshot(path: &Path) -> Result<TreeNode, CliError> {
    let json = read_input(path)?;
    let snapshot = TreeNode::from_json(&json)?;
    snapshot.validate_snapshot()?;
    Ok(snapshot)
}

/// Read a tree JSON file without snapshot checks.
///
/// Parsed trees may legitimately carry move annotations, so only the
/// document shape is checked.
pub fn read_tree(path: &Path) -> Result<TreeNode, CliError> {
    let json = read_input(path)?;
    Ok(TreeNode::from_json(&json)?)
}

/// Write a document to stdout followed by a newline.
pub fn print_document(document: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    if !document.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
