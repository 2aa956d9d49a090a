//! Round-trip verification.
//!
//! Hosts use this as a self-check before handing a text to the user: the text
//! must parse back into a tree with the same shape as the snapshot and with
//! no id assigned twice.

use std::collections::HashSet;

use serde::Serialize;

use crate::text::parse;
use crate::tree::TreeNode;

/// Outcome of [`verify_round_trip`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    /// Nodes in the parsed tree.
    pub total_nodes: usize,
    /// Distinct ids in the parsed tree.
    pub unique_ids: usize,
    /// Whether some id appears more than once.
    pub has_duplicate_ids: bool,
    /// Whether names, directory flags and child counts match the snapshot.
    pub structure_match: bool,
    /// Whether the text parsed at all.
    pub parse_failed: bool,
    /// Overall verdict.
    pub valid: bool,
}

/// Parse `text` against `original` and check the result.
///
/// Ids are ignored when comparing structure; only names, directory flags and
/// child counts are compared, recursively and in order.
///
/// # Examples
///
/// ```
/// use treedit::{format_tree, verify_round_trip, TreeNode};
///
/// let tree = TreeNode::dir("r", "root").with_children(vec![TreeNode::file("a", "a.txt")]);
/// let report = verify_round_trip(&format_tree(&tree), &tree);
///
/// assert!(report.valid);
/// assert_eq!(report.total_nodes, 2);
/// ```
#[must_use]
pub fn verify_round_trip(text: &str, original: &TreeNode) -> RoundTripReport {
    let Some(parsed) = parse(text, original) else {
        log::debug!("round trip: text did not parse");
        return RoundTripReport {
            parse_failed: true,
            ..RoundTripReport::default()
        };
    };

    let mut ids = HashSet::new();
    let mut total_nodes = 0;
    parsed.root.walk(|node, _| {
        total_nodes += 1;
        ids.insert(&node.id);
    });

    let unique_ids = ids.len();
    let has_duplicate_ids = unique_ids != total_nodes;
    let structure_match = same_structure(original, &parsed.root);

    RoundTripReport {
        total_nodes,
        unique_ids,
        has_duplicate_ids,
        structure_match,
        parse_failed: false,
        valid: structure_match && !has_duplicate_ids,
    }
}

/// Whether two trees have the same names, directory flags and shape.
#[must_use]
pub fn same_structure(a: &TreeNode, b: &TreeNode) -> bool {
    a.name == b.name
        && a.is_dir == b.is_dir
        && a.children.len() == b.children.len()
        && a.children
            .iter()
            .zip(&b.children)
            .all(|(x, y)| same_structure(x, y))
}
