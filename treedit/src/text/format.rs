//! Rendering a tree into the connector-glyph text notation.

use crate::tree::TreeNode;

/// Connector for a node that is the last child of its parent.
pub const LAST_CONNECTOR: &str = "└── ";
/// Connector for a node that has later siblings.
pub const BRANCH_CONNECTOR: &str = "├── ";
/// Prefix extension below a last child.
pub const LAST_INDENT: &str = "    ";
/// Prefix extension below a child that has later siblings.
pub const BRANCH_INDENT: &str = "│   ";
/// Text columns per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// Render `root` as text, one line per node in pre-order.
///
/// The root line is the bare name. Children of the root are flush-left;
/// deeper levels are indented four columns per level. Every line, including
/// the last, ends with `\n`.
///
/// # Examples
///
/// ```
/// use treedit::{format_tree, TreeNode};
///
/// let tree = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::file("a", "file1.txt"),
///     TreeNode::dir("d", "dir1").with_children(vec![TreeNode::file("b", "file2.txt")]),
/// ]);
///
/// assert_eq!(
///     format_tree(&tree),
///     "root/\n├── file1.txt\n└── dir1/\n    └── file2.txt\n"
/// );
/// ```
#[must_use]
pub fn format_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&root.display_name());
    out.push('\n');
    write_children(&root.children, "", &mut out);
    out
}

fn write_children(children: &[TreeNode], prefix: &str, out: &mut String) {
    for (position, child) in children.iter().enumerate() {
        let is_last = position + 1 == children.len();

        out.push_str(prefix);
        out.push_str(if is_last { LAST_CONNECTOR } else { BRANCH_CONNECTOR });
        out.push_str(&child.name);
        if child.is_dir {
            out.push('/');
        }
        out.push('\n');

        if !child.children.is_empty() {
            let extension = if is_last { LAST_INDENT } else { BRANCH_INDENT };
            write_children(&child.children, &format!("{prefix}{extension}"), out);
        }
    }
}
