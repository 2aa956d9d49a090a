//! Path and name indexes over a snapshot.
//!
//! The parser uses these to find candidate identities for edited lines and to
//! look up where a resolved node used to live.

use std::collections::HashMap;

use super::node::{NodeId, TreeNode};

/// One node of the flat, document-ordered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Node identifier.
    pub id: NodeId,
    /// Node name, without the directory slash.
    pub name: String,
}

/// Indexes built from one snapshot in a single pre-order pass.
///
/// # Examples
///
/// ```
/// use treedit::{NodeId, PathIndex, TreeNode};
///
/// let tree = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::dir("d", "docs").with_children(vec![TreeNode::file("f", "a.md")]),
/// ]);
/// let index = PathIndex::build(&tree);
///
/// assert_eq!(index.path_of(&NodeId::from("f")), Some("root/docs/a.md"));
/// assert_eq!(index.ids_named("docs"), &[NodeId::from("d")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    entries: Vec<IndexEntry>,
    paths: HashMap<NodeId, String>,
    by_name: HashMap<String, Vec<NodeId>>,
}

impl PathIndex {
    /// Build all three indexes for `root`.
    #[must_use]
    pub fn build(root: &TreeNode) -> Self {
        let mut index = Self::default();
        let mut stack: Vec<(&TreeNode, String)> = vec![(root, root.name.clone())];

        while let Some((node, path)) = stack.pop() {
            for child in node.children.iter().rev() {
                stack.push((child, format!("{path}/{}", child.name)));
            }

            index.entries.push(IndexEntry {
                id: node.id.clone(),
                name: node.name.clone(),
            });
            index
                .by_name
                .entry(node.name.clone())
                .or_default()
                .push(node.id.clone());
            // First occurrence wins if a malformed snapshot repeats an id.
            index.paths.entry(node.id.clone()).or_insert(path);
        }

        index
    }

    /// All nodes in pre-order.
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Root-relative, `/`-joined path of a node, root name included.
    #[must_use]
    pub fn path_of(&self, id: &NodeId) -> Option<&str> {
        self.paths.get(id).map(String::as_str)
    }

    /// Ids of every node with exactly this name, in document order.
    #[must_use]
    pub fn ids_named(&self, name: &str) -> &[NodeId] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether the id belongs to the indexed snapshot.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.paths.contains_key(id)
    }

    /// Number of indexed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty. Never true for an index built from a tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
