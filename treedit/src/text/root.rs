//! Root guard: the root entry's name and type cannot be edited.
//!
//! The root comes from the scanner. If the user retypes the first line, the
//! change is detected here, reported to the host, and never reaches the
//! parsed tree.

use serde::Serialize;

use crate::tree::TreeNode;

/// Outcome of comparing the first line of edited text with the snapshot root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootNameChange {
    /// Whether the first line differs from the original root line.
    pub changed: bool,
    /// Original root line, with `/` when the root is a directory.
    pub original_name: String,
    /// First line of the edited text, trimmed.
    pub new_name: String,
}

/// Compare the first non-blank line of `text` with the root of `original`.
///
/// The comparison is exact against the rendered root line, so dropping the
/// trailing `/` of a directory root counts as a change. Empty text is never a
/// change.
///
/// # Examples
///
/// ```
/// use treedit::{check_root_name_change, TreeNode};
///
/// let original = TreeNode::dir("r", "root");
/// let change = check_root_name_change("renamed\n└── a.txt\n", &original);
///
/// assert!(change.changed);
/// assert_eq!(change.original_name, "root/");
/// assert_eq!(change.new_name, "renamed");
/// ```
#[must_use]
pub fn check_root_name_change(text: &str, original: &TreeNode) -> RootNameChange {
    let original_name = original.display_name();
    match first_line(text) {
        Some(line) => {
            let new_name = line.trim().to_string();
            RootNameChange {
                changed: new_name != original_name,
                original_name,
                new_name,
            }
        }
        None => RootNameChange {
            changed: false,
            new_name: original_name.clone(),
            original_name,
        },
    }
}

/// Whether a root line names a different root, ignoring a trailing `/`.
///
/// This is the looser check the parser applies: a directory root written
/// without its slash still names the same root.
#[must_use]
pub fn names_other_root(root_line: &str, original: &TreeNode) -> bool {
    let typed = root_line.trim();
    let typed = typed.strip_suffix('/').unwrap_or(typed);
    typed != original.name
}

/// Replace the first non-blank line of `text` with the original root line.
///
/// Every other byte of the text, including line endings, is kept. Text with
/// no non-blank line gets the root line prepended.
///
/// # Examples
///
/// ```
/// use treedit::{restore_root_line, TreeNode};
///
/// let original = TreeNode::dir("r", "root");
/// assert_eq!(
///     restore_root_line("oops/\n└── a.txt\n", &original),
///     "root/\n└── a.txt\n"
/// );
/// ```
#[must_use]
pub fn restore_root_line(text: &str, original: &TreeNode) -> String {
    let root_line = original.display_name();
    let mut restored = String::with_capacity(text.len() + root_line.len());
    let mut replaced = false;

    for segment in text.split_inclusive('\n') {
        if replaced || segment.trim().is_empty() {
            restored.push_str(segment);
            continue;
        }
        let ending = line_ending(segment);
        restored.push_str(&root_line);
        restored.push_str(ending);
        replaced = true;
    }

    if !replaced {
        return format!("{root_line}\n{text}");
    }
    restored
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().find(|line| !line.trim().is_empty())
}

fn line_ending(segment: &str) -> &str {
    if segment.ends_with("\r\n") {
        "\r\n"
    } else if segment.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
