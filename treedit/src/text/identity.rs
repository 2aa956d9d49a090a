//! Identity resolution: matching edited lines to original node ids.
//!
//! Matching is greedy and order-dependent. A line takes the first unused
//! original node with the same name; failing that, the first unused node in
//! document order; failing that, a new id. Simple renames and reorders of
//! distinctly named entries resolve correctly. When several original nodes
//! share a name, the first line to claim the name gets the first such node,
//! which may not be the one the user meant. [`MatchConfidence`] records which
//! rule applied so hosts can warn about the weaker matches.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::tree::{NodeId, PathIndex};

/// Which rule assigned an id to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// The root line, which always keeps the snapshot root id.
    Root,
    /// Matched by name, and the name was unique in the original snapshot.
    Unique,
    /// Matched by name, but several original nodes had that name.
    SharedName,
    /// No unused node had the name; an arbitrary unused id was taken.
    Fallback,
    /// No unused ids were left; a new id was minted.
    Minted,
    /// The id collided with an earlier node and was replaced.
    Repaired,
}

impl MatchConfidence {
    /// Whether the match is a guess the user may want to double-check.
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        matches!(self, Self::SharedName | Self::Fallback | Self::Repaired)
    }
}

/// Stateful resolver for one parse.
///
/// # Examples
///
/// ```
/// use treedit::text::{IdentityResolver, MatchConfidence};
/// use treedit::{NodeId, PathIndex, TreeNode};
///
/// let original = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::file("a", "a.txt"),
///     TreeNode::file("b", "b.txt"),
/// ]);
/// let index = PathIndex::build(&original);
/// let mut resolver = IdentityResolver::new(&index, &original.id);
///
/// assert_eq!(resolver.resolve("b.txt", 1), (NodeId::from("b"), MatchConfidence::Unique));
/// assert_eq!(resolver.resolve("renamed.txt", 2), (NodeId::from("a"), MatchConfidence::Fallback));
/// assert_eq!(resolver.resolve("c.txt", 3), (NodeId::from("new-3"), MatchConfidence::Minted));
/// ```
#[derive(Debug)]
pub struct IdentityResolver<'a> {
    index: &'a PathIndex,
    used: HashSet<NodeId>,
    /// Position in `index.entries()` before which every id is used.
    next_unused: usize,
    /// Per name, position in `index.ids_named(name)` before which every id is
    /// used.
    name_cursors: HashMap<String, usize>,
}

impl<'a> IdentityResolver<'a> {
    /// Create a resolver over `index`, with the root id already consumed.
    #[must_use]
    pub fn new(index: &'a PathIndex, root_id: &NodeId) -> Self {
        let mut used = HashSet::new();
        used.insert(root_id.clone());
        Self {
            index,
            used,
            next_unused: 0,
            name_cursors: HashMap::new(),
        }
    }

    /// Assign an id to the line with number `line` and name `name`.
    pub fn resolve(&mut self, name: &str, line: usize) -> (NodeId, MatchConfidence) {
        if let Some(id) = self.take_by_name(name) {
            let confidence = if self.index.ids_named(name).len() == 1 {
                MatchConfidence::Unique
            } else {
                MatchConfidence::SharedName
            };
            return (id, confidence);
        }

        if let Some(id) = self.take_any_unused() {
            return (id, MatchConfidence::Fallback);
        }

        (self.mint(line), MatchConfidence::Minted)
    }

    /// Mint an id that collides with neither the snapshot nor anything handed
    /// out so far.
    ///
    /// Ids are derived from the line number (`new-{line}`), with a numeric
    /// suffix when that is taken, so parsing stays deterministic.
    pub fn mint(&mut self, line: usize) -> NodeId {
        let base = format!("new-{line}");
        let mut candidate = NodeId::new(base.clone());
        let mut suffix = 1;
        while self.index.contains(&candidate) || self.used.contains(&candidate) {
            candidate = NodeId::new(format!("{base}-{suffix}"));
            suffix += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }

    /// Replace every id that already appeared earlier in `ids`.
    ///
    /// `ids` is in document order and `lines` gives the text line of each
    /// entry. Returns `(position, duplicate, replacement)` for every repair.
    pub fn repair_duplicates(
        &mut self,
        ids: &mut [NodeId],
        lines: &[usize],
    ) -> Vec<(usize, NodeId, NodeId)> {
        let mut seen = HashSet::new();
        let mut repairs = Vec::new();

        for (position, id) in ids.iter_mut().enumerate() {
            if seen.insert(id.clone()) {
                continue;
            }
            let line = lines.get(position).copied().unwrap_or(position);
            let replacement = self.mint(line);
            seen.insert(replacement.clone());
            let duplicate = std::mem::replace(id, replacement.clone());
            repairs.push((position, duplicate, replacement));
        }

        repairs
    }

    fn take_by_name(&mut self, name: &str) -> Option<NodeId> {
        let candidates = self.index.ids_named(name);
        let cursor = self.name_cursors.entry(name.to_string()).or_insert(0);

        while let Some(id) = candidates.get(*cursor) {
            if self.used.contains(id) {
                *cursor += 1;
                continue;
            }
            self.used.insert(id.clone());
            *cursor += 1;
            return Some(id.clone());
        }
        None
    }

    fn take_any_unused(&mut self) -> Option<NodeId> {
        let entries = self.index.entries();
        while let Some(entry) = entries.get(self.next_unused) {
            self.next_unused += 1;
            if self.used.insert(entry.id.clone()) {
                return Some(entry.id.clone());
            }
        }
        None
    }
}
