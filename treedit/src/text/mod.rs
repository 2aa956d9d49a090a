//! The text notation and its reconciliation with snapshots.
//!
//! [`format_tree`] renders a snapshot as connector-glyph text. [`parse`] reads
//! edited text back against the snapshot, keeping node identities across
//! renames, moves and reorders. The root guard helpers let hosts detect and
//! undo edits to the first line before parsing.

mod format;
mod identity;
mod line;
mod parse;
mod root;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use format::{
    format_tree, BRANCH_CONNECTOR, BRANCH_INDENT, INDENT_WIDTH, LAST_CONNECTOR, LAST_INDENT,
};
pub use identity::{IdentityResolver, MatchConfidence};
pub use line::{extract_name, nesting_level, LineEntry};
pub use parse::{parse, parse_with_sink, Move, ParsedTree, Resolution};
pub use root::{check_root_name_change, names_other_root, restore_root_line, RootNameChange};
