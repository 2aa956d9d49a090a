//! Output formatter implementations.

use serde::Serialize;

use crate::conflict::ConflictReport;
use crate::diagnostics::Diagnostic;
use crate::text::{Move, ParsedTree, Resolution, RootNameChange};
use crate::tree::TreeNode;
use crate::verify::RoundTripReport;
use crate::Result;

use super::OutputFormatter;

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_conflicts(&self, report: &ConflictReport) -> Result<String> {
        if report.is_clean() {
            return Ok("No conflicts found.".to_string());
        }

        let mut lines = Vec::new();

        if !report.file_errors.is_empty() {
            lines.push("Cannot apply changes: Duplicate files detected.".to_string());
            lines.extend(report.file_errors.iter().map(|e| format!("  {}", e.summary())));
        }

        if !report.folder_merges.is_empty() {
            lines.push("The following folders will be merged:".to_string());
            lines.extend(report.folder_merges.iter().map(|m| format!("  {}", m.summary())));
        }

        Ok(lines.join("\n"))
    }

    fn format_round_trip(&self, report: &RoundTripReport) -> Result<String> {
        if report.parse_failed {
            return Ok("Round trip failed: text did not parse.".to_string());
        }

        let verdict = if report.valid { "passed" } else { "failed" };
        let lines = [
            format!("Round trip {verdict}."),
            format!("  nodes: {}", report.total_nodes),
            format!("  unique ids: {}", report.unique_ids),
            format!("  duplicate ids: {}", yes_no(report.has_duplicate_ids)),
            format!("  structure matches: {}", yes_no(report.structure_match)),
        ];
        Ok(lines.join("\n"))
    }

    fn format_root_change(&self, change: &RootNameChange) -> Result<String> {
        if change.changed {
            Ok(format!(
                "Root name cannot be changed: '{}' (expected '{}').",
                change.new_name, change.original_name
            ))
        } else {
            Ok(format!("Root line unchanged: '{}'.", change.original_name))
        }
    }

    fn format_parse_summary(&self, parsed: &ParsedTree) -> Result<String> {
        let moves = parsed.moves();
        let mut lines = vec![format!(
            "{} nodes, {} moved or renamed, {} dropped lines",
            parsed.root.node_count(),
            moves.len(),
            parsed.dropped_lines()
        )];

        for entry in &moves {
            lines.push(format!("  {} -> {}", entry.old_path, entry.new_path));
        }

        let ambiguous = parsed.ambiguous();
        if !ambiguous.is_empty() {
            lines.push("Identities that were guessed:".to_string());
            for resolution in ambiguous {
                lines.push(format!(
                    "  line {}: {} ({})",
                    resolution.line + 1,
                    resolution.path,
                    resolution.id
                ));
            }
        }

        for diagnostic in &parsed.diagnostics {
            lines.push(format!("{}: {diagnostic}", diagnostic.severity()));
        }

        Ok(lines.join("\n"))
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct ParseSummary<'a> {
    tree: &'a TreeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    root_change: Option<&'a RootNameChange>,
    moves: Vec<Move>,
    resolutions: &'a [Resolution],
    diagnostics: &'a [Diagnostic],
}

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_conflicts(&self, report: &ConflictReport) -> Result<String> {
        Self::to_json(report)
    }

    fn format_round_trip(&self, report: &RoundTripReport) -> Result<String> {
        Self::to_json(report)
    }

    fn format_root_change(&self, change: &RootNameChange) -> Result<String> {
        Self::to_json(change)
    }

    fn format_parse_summary(&self, parsed: &ParsedTree) -> Result<String> {
        Self::to_json(&ParseSummary {
            tree: &parsed.root,
            root_change: parsed.root_change.as_ref(),
            moves: parsed.moves(),
            resolutions: &parsed.resolutions,
            diagnostics: &parsed.diagnostics,
        })
    }
}
