//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    AnalyzeCommand, CheckRootCommand, CompletionsCommand, FormatCommand, ParseCommand,
    ReconcileCommand, ValidateCommand, VerifyCommand,
};

/// Edit directory trees as plain text
#[derive(Parser)]
#[command(name = "treedit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file applied on top of user and project configuration
    #[arg(long, global = true, value_name = "PATH", env = "TREEDIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a snapshot as tree text
    Format(FormatCommand),

    /// Check whether the root line of edited text was changed
    CheckRoot(CheckRootCommand),

    /// Parse edited text against a snapshot
    Parse(ParseCommand),

    /// Report duplicate files and folder merges in a tree
    Analyze(AnalyzeCommand),

    /// Parse, check and produce the hand-off document
    Reconcile(ReconcileCommand),

    /// Check that a text parses back into the snapshot's shape
    Verify(VerifyCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
