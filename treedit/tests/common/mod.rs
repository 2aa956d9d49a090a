//! Common test utilities for integration tests.
//!
//! This module provides snapshot fixtures and small helpers for testing the
//! treedit library.

use treedit::TreeNode;

/// The snapshot most tests start from:
///
/// ```text
/// __temp/
/// ├── folder1/
/// │   ├── file1.txt
/// │   └── file2.txt
/// └── folder2/
///     └── file3.txt
/// ```
#[allow(dead_code)]
pub fn two_folders() -> TreeNode {
    TreeNode::dir("root-id", "__temp").with_children(vec![
        TreeNode::dir("folder1-id", "folder1").with_children(vec![
            TreeNode::file("file1-id", "file1.txt"),
            TreeNode::file("file2-id", "file2.txt"),
        ]),
        TreeNode::dir("folder2-id", "folder2")
            .with_children(vec![TreeNode::file("file3-id", "file3.txt")]),
    ])
}

/// A project-like snapshot with repeated file names in different folders.
#[allow(dead_code)]
pub fn project() -> TreeNode {
    TreeNode::dir("p", "project").with_children(vec![
        TreeNode::dir("src", "src").with_children(vec![
            TreeNode::file("src-mod", "mod.rs"),
            TreeNode::file("lib", "lib.rs"),
        ]),
        TreeNode::dir("tests", "tests").with_children(vec![
            TreeNode::file("tests-mod", "mod.rs"),
            TreeNode::file("it", "integration.rs"),
        ]),
        TreeNode::file("readme", "README.md"),
        TreeNode::file("cargo", "Cargo.toml"),
    ])
}

/// Ids of every node, in pre-order.
#[allow(dead_code)]
pub fn ids(tree: &TreeNode) -> Vec<String> {
    let mut ids = Vec::new();
    tree.walk(|node, _| ids.push(node.id.to_string()));
    ids
}

/// Find a node by path, where the first segment is the root name.
#[allow(dead_code)]
pub fn find<'a>(tree: &'a TreeNode, path: &str) -> Option<&'a TreeNode> {
    let mut segments = path.split('/');
    if segments.next()? != tree.name {
        return None;
    }
    segments.try_fold(tree, |node, segment| {
        node.children.iter().find(|child| child.name == segment)
    })
}
