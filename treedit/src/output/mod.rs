//! Output formatting for reports.
//!
//! This module renders conflict reports, round-trip reports, root checks and
//! parse summaries either as sentences for people or as JSON for tools.

mod formatters;

use crate::config::OutputFormat;
use crate::conflict::ConflictReport;
use crate::text::{ParsedTree, RootNameChange};
use crate::verify::RoundTripReport;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for formatting library reports into different output formats.
pub trait OutputFormatter {
    /// Format the result of conflict analysis.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_conflicts(&self, report: &ConflictReport) -> Result<String>;

    /// Format the result of a round-trip check.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_round_trip(&self, report: &RoundTripReport) -> Result<String>;

    /// Format the result of a root line check.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_root_change(&self, change: &RootNameChange) -> Result<String>;

    /// Format what parsing did: moves, guessed identities and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_parse_summary(&self, parsed: &ParsedTree) -> Result<String>;
}

/// Create a formatter for an output format.
///
/// # Examples
///
/// ```
/// use treedit::config::OutputFormat;
/// use treedit::output::create_formatter;
/// use treedit::ConflictReport;
///
/// let report = ConflictReport { valid: true, ..Default::default() };
/// let text = create_formatter(OutputFormat::Human).format_conflicts(&report).unwrap();
/// assert_eq!(text, "No conflicts found.");
/// ```
#[must_use]
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
