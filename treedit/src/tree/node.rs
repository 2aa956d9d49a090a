//! Core tree types.
//!
//! A [`TreeNode`] is one entry of a directory snapshot. Snapshots arrive from
//! an external scanner as JSON and leave for an external executor as JSON, so
//! the serde layout here is the wire format.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable identifier of a node within one snapshot.
///
/// Identifiers are minted by the scanner and carried through an edit session
/// so that a renamed or moved line can be recognized as the same entry.
///
/// # Examples
///
/// ```
/// use treedit::NodeId;
///
/// let id = NodeId::from("abc");
/// assert_eq!(id.as_str(), "abc");
/// assert_eq!(id.to_string(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One file or directory in a snapshot.
///
/// `old_path` and `new_path` are only set on trees produced by parsing, and
/// only on nodes whose identity resolved to a different path than the one it
/// had in the original snapshot.
///
/// # Examples
///
/// ```
/// use treedit::TreeNode;
///
/// let tree = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::file("a", "a.txt"),
///     TreeNode::dir("d", "docs"),
/// ]);
/// assert_eq!(tree.node_count(), 3);
/// assert_eq!(tree.children[1].display_name(), "docs/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable identifier, unique within the snapshot.
    pub id: NodeId,

    /// Display name. Never contains `/` for non-root nodes.
    pub name: String,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Children in display order. Always empty for files.
    #[serde(default)]
    pub children: Vec<TreeNode>,

    /// Path the node had in the original snapshot, when it moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,

    /// Path the node has after the edit, when it moved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
}

impl TreeNode {
    /// Create a file node.
    #[must_use]
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id.into(), name.into(), false)
    }

    /// Create an empty directory node.
    #[must_use]
    pub fn dir(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id.into(), name.into(), true)
    }

    fn new(id: NodeId, name: String, is_dir: bool) -> Self {
        Self {
            id,
            name,
            is_dir,
            children: Vec::new(),
            old_path: None,
            new_path: None,
        }
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Name as it appears in the text notation, with a `/` for directories.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Whether the node carries a move annotation.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.old_path.is_some() && self.new_path.is_some()
    }

    /// Visit every node in pre-order together with its depth (root is 0).
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a TreeNode, usize)) {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Total number of nodes, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Whether any node in the tree carries the given id.
    #[must_use]
    pub fn contains_id(&self, id: &NodeId) -> bool {
        let mut found = false;
        self.walk(|node, _| found |= &node.id == id);
        found
    }

    /// Check the invariants an input snapshot must satisfy.
    ///
    /// Ids must be unique, files must have no children, and every non-root
    /// name must be non-empty and free of `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshot`] describing the first violation.
    pub fn validate_snapshot(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut violation = None;

        self.walk(|node, depth| {
            if violation.is_some() {
                return;
            }
            if !seen.insert(&node.id) {
                violation = Some(format!("id '{}' appears more than once", node.id));
            } else if !node.is_dir && !node.children.is_empty() {
                violation = Some(format!("file '{}' has children", node.name));
            } else if depth > 0 && node.name.is_empty() {
                violation = Some(format!("node '{}' has an empty name", node.id));
            } else if depth > 0 && node.name.contains('/') {
                violation = Some(format!("name '{}' contains '/'", node.name));
            }
        });

        match violation {
            Some(reason) => Err(Error::InvalidSnapshot { reason }),
            None => Ok(()),
        }
    }

    /// Decode a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a valid tree document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::dir("root-id", "root").with_children(vec![
            TreeNode::dir("docs-id", "docs").with_children(vec![TreeNode::file("a-id", "a.md")]),
            TreeNode::file("b-id", "b.txt"),
        ])
    }

    #[test]
    fn test_walk_is_pre_order_with_depth() {
        let tree = sample();
        let mut visited = Vec::new();
        tree.walk(|node, depth| visited.push((node.name.as_str(), depth)));
        assert_eq!(
            visited,
            vec![("root", 0), ("docs", 1), ("a.md", 2), ("b.txt", 1)]
        );
    }

    #[test]
    fn test_node_count_and_contains() {
        let tree = sample();
        assert_eq!(tree.node_count(), 4);
        assert!(tree.contains_id(&NodeId::from("a-id")));
        assert!(!tree.contains_id(&NodeId::from("zzz")));
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"id":"r","name":"root","is_dir":true,"children":[{"id":"f","name":"f.txt","is_dir":false}]}"#;
        let tree = TreeNode::from_json(json).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert!(tree.children[0].children.is_empty());

        let encoded = serde_json::to_value(&tree).unwrap();
        assert_eq!(encoded["children"][0]["is_dir"], false);
        assert!(encoded["children"][0].get("old_path").is_none());
    }

    #[test]
    fn test_move_annotations_serialized_when_present() {
        let mut node = TreeNode::file("f", "f.txt");
        node.old_path = Some("root/a/f.txt".to_string());
        node.new_path = Some("root/f.txt".to_string());
        assert!(node.has_moved());

        let encoded = serde_json::to_value(&node).unwrap();
        assert_eq!(encoded["old_path"], "root/a/f.txt");
        assert_eq!(encoded["new_path"], "root/f.txt");
    }

    #[test]
    fn test_validate_snapshot_accepts_valid_tree() {
        assert!(sample().validate_snapshot().is_ok());
    }

    #[test]
    fn test_validate_snapshot_rejects_duplicate_ids() {
        let tree = TreeNode::dir("r", "root")
            .with_children(vec![TreeNode::file("x", "a"), TreeNode::file("x", "b")]);
        let err = tree.validate_snapshot().unwrap_err();
        assert!(format!("{err}").contains("more than once"));
    }

    #[test]
    fn test_validate_snapshot_rejects_file_with_children() {
        let tree = TreeNode::dir("r", "root").with_children(vec![
            TreeNode::file("f", "f.txt").with_children(vec![TreeNode::file("g", "g")])
        ]);
        assert!(tree.validate_snapshot().is_err());
    }

    #[test]
    fn test_validate_snapshot_rejects_slash_in_name() {
        let tree = TreeNode::dir("r", "root").with_children(vec![TreeNode::file("f", "a/b")]);
        assert!(tree.validate_snapshot().is_err());
    }
}
