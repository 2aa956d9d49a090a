//! Structural validation of a reconciled tree.
//!
//! A reconciled tree can describe states no filesystem can hold: two files
//! with the same name in one directory, or a file and a folder sharing a name.
//! Those are hard conflicts. Two folders with the same name are a soft
//! conflict, since the executor can merge them, unless the merge itself would
//! bring two same-named files together.

use std::collections::HashMap;

use serde::Serialize;

use crate::tree::{NodeId, TreeNode};

/// Why a group of entries cannot coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Several files with one name in the same directory.
    SameDirectory,
    /// Files with one name coming from different folders that would be
    /// merged.
    AfterMerge,
    /// A file and a folder with the same name in the same directory.
    TypeClash,
}

/// A hard conflict: applying the tree would lose or clobber entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileConflict {
    /// Directory the conflict is in. For merge conflicts this is the parent
    /// path followed by ` (after merge)`.
    pub path: String,
    /// Full paths of every colliding entry.
    pub duplicates: Vec<String>,
    /// What kind of collision this is.
    pub kind: ConflictKind,
}

impl FileConflict {
    /// The sentence shown to the user for this conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedit::{ConflictKind, FileConflict};
    ///
    /// let conflict = FileConflict {
    ///     path: "root".to_string(),
    ///     duplicates: vec!["root/dup.txt".to_string(), "root/dup.txt".to_string()],
    ///     kind: ConflictKind::SameDirectory,
    /// };
    /// assert_eq!(
    ///     conflict.summary(),
    ///     "Directory \"root\" has 2 duplicate files with name: dup.txt"
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.duplicates.iter().map(|path| last_segment(path)).collect();

        if self.kind == ConflictKind::TypeClash {
            return format!(
                "Directory \"{}\" has a file and a folder with the same name: {}",
                self.path,
                names.first().copied().unwrap_or_default()
            );
        }

        match names.split_first() {
            Some((first, rest)) if rest.iter().all(|name| name == first) => format!(
                "Directory \"{}\" has {} duplicate files with name: {first}",
                self.path,
                names.len()
            ),
            _ => format!(
                "Directory \"{}\" has duplicate files: {}",
                self.path,
                names.join(", ")
            ),
        }
    }
}

/// A soft conflict: folders that the executor will merge into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderMerge {
    /// Directory containing the same-named folders.
    pub path: String,
    /// Full paths of the folders.
    pub folders: Vec<String>,
}

impl FolderMerge {
    /// The sentence shown to the user when asking to confirm the merge.
    #[must_use]
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.folders.iter().map(|path| last_segment(path)).collect();
        format!(
            "Directory \"{}\" has folders that will be merged: {}",
            self.path,
            names.join(", ")
        )
    }
}

/// Everything [`analyze`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    /// True when there are no hard conflicts.
    pub valid: bool,
    /// Hard conflicts.
    pub file_errors: Vec<FileConflict>,
    /// Soft conflicts.
    pub folder_merges: Vec<FolderMerge>,
}

impl ConflictReport {
    /// Whether the tree can be applied only after the user accepts merges.
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        self.valid && !self.folder_merges.is_empty()
    }

    /// Whether nothing at all was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.file_errors.is_empty() && self.folder_merges.is_empty()
    }
}

/// One child seen under a directory path.
struct Entry<'a> {
    path: String,
    node: &'a TreeNode,
    /// The directory node the child was found in. Several nodes share a path
    /// when folders are being merged.
    origin: &'a NodeId,
}

/// Children under one directory path sharing a name.
struct Bucket<'a> {
    entries: Vec<Entry<'a>>,
}

impl Bucket<'_> {
    fn has_files(&self) -> bool {
        self.entries.iter().any(|entry| !entry.node.is_dir)
    }

    fn has_dirs(&self) -> bool {
        self.entries.iter().any(|entry| entry.node.is_dir)
    }

    fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.path.clone()).collect()
    }

    /// Paths of files that collide within a single directory node.
    fn same_origin_duplicates(&self) -> Vec<Vec<String>> {
        let mut origins: Vec<&NodeId> = Vec::new();
        for entry in &self.entries {
            if !origins.contains(&entry.origin) {
                origins.push(entry.origin);
            }
        }

        origins
            .into_iter()
            .map(|origin| {
                self.entries
                    .iter()
                    .filter(|entry| entry.origin == origin)
                    .map(|entry| entry.path.clone())
                    .collect::<Vec<_>>()
            })
            .filter(|paths| paths.len() > 1)
            .collect()
    }
}

/// Every child found under one directory path, grouped by name.
struct DirectoryGroup<'a> {
    path: String,
    positions: HashMap<&'a str, usize>,
    buckets: Vec<Bucket<'a>>,
}

impl<'a> DirectoryGroup<'a> {
    fn new(path: String) -> Self {
        Self {
            path,
            positions: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    fn add(&mut self, dir: &'a TreeNode, child: &'a TreeNode) {
        let buckets = &mut self.buckets;
        let position = *self
            .positions
            .entry(child.name.as_str())
            .or_insert_with(|| {
                buckets.push(Bucket {
                    entries: Vec::new(),
                });
                buckets.len() - 1
            });
        buckets[position].entries.push(Entry {
            path: format!("{}/{}", self.path, child.name),
            node: child,
            origin: &dir.id,
        });
    }
}

/// A file from one of the folders being merged, tagged with that folder.
///
/// Merged folders share a path, so the origin is the folder's id.
struct MergedFile<'a> {
    path: String,
    origin: &'a NodeId,
}

/// Check a tree for duplicate files and folder merges.
///
/// Children are grouped per directory path, so the contents of same-named
/// folders are looked at together, at every depth below the merge. Paths are
/// reported in pre-order of first appearance and, within a path, names in
/// order of first appearance.
///
/// # Examples
///
/// ```
/// use treedit::{analyze, TreeNode};
///
/// let tree = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::dir("a", "folder1").with_children(vec![TreeNode::file("x", "a.txt")]),
///     TreeNode::dir("b", "folder1").with_children(vec![TreeNode::file("y", "b.txt")]),
/// ]);
///
/// let report = analyze(&tree);
/// assert!(report.valid);
/// assert!(report.needs_confirmation());
/// assert_eq!(report.folder_merges[0].folders, vec!["root/folder1", "root/folder1"]);
/// ```
#[must_use]
pub fn analyze(root: &TreeNode) -> ConflictReport {
    let mut report = ConflictReport::default();

    for group in directory_groups(root) {
        for bucket in &group.buckets {
            if bucket.entries.len() < 2 {
                continue;
            }

            if bucket.has_files() && bucket.has_dirs() {
                report.file_errors.push(FileConflict {
                    path: group.path.clone(),
                    duplicates: bucket.paths(),
                    kind: ConflictKind::TypeClash,
                });
            } else if bucket.has_files() {
                // Files from different merged folders are reported by the
                // merge check one level up.
                for duplicates in bucket.same_origin_duplicates() {
                    report.file_errors.push(FileConflict {
                        path: group.path.clone(),
                        duplicates,
                        kind: ConflictKind::SameDirectory,
                    });
                }
            } else {
                report
                    .file_errors
                    .extend(merge_conflicts(&group.path, &bucket.entries));
                report.folder_merges.push(FolderMerge {
                    path: group.path.clone(),
                    folders: bucket.paths(),
                });
            }
        }
    }

    report.valid = report.file_errors.is_empty();
    if !report.is_clean() {
        log::debug!(
            "conflict analysis: {} hard, {} merges",
            report.file_errors.len(),
            report.folder_merges.len()
        );
    }
    report
}

/// One pre-order pass collecting the children of every directory path.
fn directory_groups(root: &TreeNode) -> Vec<DirectoryGroup<'_>> {
    let mut groups: Vec<DirectoryGroup<'_>> = Vec::new();
    let mut by_path: HashMap<String, usize> = HashMap::new();
    let mut stack: Vec<(&TreeNode, String)> = vec![(root, root.name.clone())];

    while let Some((dir, path)) = stack.pop() {
        for child in dir.children.iter().rev().filter(|child| child.is_dir) {
            stack.push((child, format!("{path}/{}", child.name)));
        }

        let index = *by_path.entry(path.clone()).or_insert_with(|| {
            groups.push(DirectoryGroup::new(path));
            groups.len() - 1
        });

        for child in &dir.children {
            groups[index].add(dir, child);
        }
    }

    groups
}

/// Files that would collide once the folders in one merge group are merged.
fn merge_conflicts(parent: &str, folders: &[Entry<'_>]) -> Vec<FileConflict> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut by_name: Vec<Vec<MergedFile<'_>>> = Vec::new();

    for folder in folders {
        for file in folder.node.children.iter().filter(|child| !child.is_dir) {
            let position = *positions.entry(file.name.as_str()).or_insert_with(|| {
                by_name.push(Vec::new());
                by_name.len() - 1
            });
            by_name[position].push(MergedFile {
                path: format!("{}/{}", folder.path, file.name),
                origin: &folder.node.id,
            });
        }
    }

    by_name
        .into_iter()
        .filter(|files| files.iter().any(|file| file.origin != files[0].origin))
        .map(|files| FileConflict {
            path: format!("{parent} (after merge)"),
            duplicates: files.into_iter().map(|file| file.path).collect(),
            kind: ConflictKind::AfterMerge,
        })
        .collect()
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
