//! Parsing edited text back into a tree.
//!
//! The parser is a single pass over the non-blank lines. Nodes live in an
//! arena and are addressed by index; a level table maps each nesting level to
//! the most recent node at that level, which is how a line finds its parent.
//! Identity resolution runs in the same pass, and a final pass repairs any id
//! assigned twice and annotates nodes whose path changed.

use serde::Serialize;

use super::identity::{IdentityResolver, MatchConfidence};
use super::line::LineEntry;
use super::root::{names_other_root, RootNameChange};
use crate::diagnostics::{report_all, Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::tree::{NodeId, PathIndex, TreeNode};

/// How one node of the parsed tree got its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Zero-based index of the non-blank line the node came from.
    pub line: usize,
    /// The id the node carries in the parsed tree.
    pub id: NodeId,
    /// Path of the node in the parsed tree.
    pub path: String,
    /// Which matching rule applied.
    pub confidence: MatchConfidence,
}

/// A node whose identity now lives at a different path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    /// Node identifier.
    pub id: NodeId,
    /// Path in the original snapshot.
    pub old_path: String,
    /// Path in the parsed tree.
    pub new_path: String,
}

/// Result of reconciling edited text against the original snapshot.
#[derive(Debug, Clone)]
pub struct ParsedTree {
    /// The reconciled tree, with move annotations.
    pub root: TreeNode,
    /// Set when the first line named a different root.
    pub root_change: Option<RootNameChange>,
    /// Resolution record for every node, in document order.
    pub resolutions: Vec<Resolution>,
    /// Everything noteworthy that happened while parsing.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedTree {
    /// All nodes that moved or were renamed, in document order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.root.walk(|node, _| {
            if let (Some(old_path), Some(new_path)) = (&node.old_path, &node.new_path) {
                moves.push(Move {
                    id: node.id.clone(),
                    old_path: old_path.clone(),
                    new_path: new_path.clone(),
                });
            }
        });
        moves
    }

    /// Resolutions that relied on a guess.
    #[must_use]
    pub fn ambiguous(&self) -> Vec<&Resolution> {
        self.resolutions
            .iter()
            .filter(|resolution| resolution.confidence.is_ambiguous())
            .collect()
    }

    /// Number of lines dropped because they had no parent.
    #[must_use]
    pub fn dropped_lines(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::OrphanLine { .. }))
            .count()
    }

    /// Hand every diagnostic to `sink`.
    pub fn report_to(&self, sink: &dyn DiagnosticSink) {
        report_all(&self.diagnostics, sink);
    }
}

struct Slot {
    id: NodeId,
    name: String,
    is_dir: bool,
    path: String,
    line: usize,
    confidence: MatchConfidence,
    children: Vec<usize>,
}

/// Parse edited text against the snapshot it was rendered from.
///
/// Returns `None` when the text has no non-blank line. Everything else is
/// recovered from: orphan lines are dropped, unmatched lines get fallback or
/// new ids, and a renamed root is restored. See [`ParsedTree::diagnostics`]
/// for what happened.
///
/// # Examples
///
/// ```
/// use treedit::{parse, TreeNode};
///
/// let original = TreeNode::dir("r", "root").with_children(vec![
///     TreeNode::dir("d", "docs"),
///     TreeNode::file("f", "notes.txt"),
/// ]);
///
/// let parsed = parse("root/\n└── docs/\n    └── notes.txt\n", &original).unwrap();
/// let notes = &parsed.root.children[0].children[0];
///
/// assert_eq!(notes.id.as_str(), "f");
/// assert_eq!(notes.old_path.as_deref(), Some("root/notes.txt"));
/// assert_eq!(notes.new_path.as_deref(), Some("root/docs/notes.txt"));
/// ```
#[must_use]
pub fn parse(text: &str, original: &TreeNode) -> Option<ParsedTree> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let (root_line, rest) = lines.split_first()?;

    let index = PathIndex::build(original);
    let mut resolver = IdentityResolver::new(&index, &original.id);
    let mut diagnostics = Vec::new();

    let root_change = names_other_root(root_line, original).then(|| {
        let change = RootNameChange {
            changed: true,
            original_name: original.display_name(),
            new_name: root_line.trim().to_string(),
        };
        log::warn!(
            "root name was modified to '{}', keeping '{}'",
            change.new_name,
            change.original_name
        );
        diagnostics.push(Diagnostic::new(
            0,
            DiagnosticKind::RootNameChanged {
                original: change.original_name.clone(),
                edited: change.new_name.clone(),
            },
        ));
        change
    });

    let mut arena = vec![Slot {
        id: original.id.clone(),
        name: original.name.clone(),
        is_dir: original.is_dir,
        path: original.name.clone(),
        line: 0,
        confidence: MatchConfidence::Root,
        children: Vec::new(),
    }];
    let mut levels: Vec<Option<usize>> = vec![Some(0)];

    for (offset, raw) in rest.iter().enumerate() {
        let line = offset + 1;
        let entry = LineEntry::parse(raw);

        let Some(parent) = find_parent(&levels, entry.level) else {
            log::warn!("no parent for '{}' at level {}", entry.name, entry.level);
            diagnostics.push(Diagnostic::new(
                line,
                DiagnosticKind::OrphanLine {
                    name: entry.name,
                    level: entry.level,
                },
            ));
            continue;
        };

        if !arena[parent].is_dir {
            if parent == 0 {
                // The root's type is fixed, so nothing can nest under a file root.
                diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticKind::OrphanLine {
                        name: entry.name,
                        level: entry.level,
                    },
                ));
                continue;
            }
            arena[parent].is_dir = true;
            diagnostics.push(Diagnostic::new(
                arena[parent].line,
                DiagnosticKind::ImplicitDirectory {
                    name: arena[parent].name.clone(),
                },
            ));
        }

        if let Some(reason) = invalid_name_reason(&entry.name) {
            diagnostics.push(Diagnostic::new(
                line,
                DiagnosticKind::InvalidName {
                    name: entry.name.clone(),
                    reason,
                },
            ));
        }

        let (id, confidence) = resolver.resolve(&entry.name, line);
        match confidence {
            MatchConfidence::Fallback => {
                log::warn!("fallback mapping: line {line} ({}) to id {id}", entry.name);
                diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticKind::FallbackMatch {
                        name: entry.name.clone(),
                        id: id.clone(),
                    },
                ));
            }
            MatchConfidence::Minted => {
                diagnostics.push(Diagnostic::new(
                    line,
                    DiagnosticKind::MintedId {
                        name: entry.name.clone(),
                        id: id.clone(),
                    },
                ));
            }
            _ => {}
        }

        let path = format!("{}/{}", arena[parent].path, entry.name);
        log::debug!(
            "line {line}: '{}' level {} under '{}' as {id}",
            entry.name,
            entry.level,
            arena[parent].path
        );

        let slot = arena.len();
        arena.push(Slot {
            id,
            name: entry.name,
            is_dir: entry.is_dir,
            path,
            line,
            confidence,
            children: Vec::new(),
        });
        arena[parent].children.push(slot);

        levels.resize(entry.level, None);
        levels.push(Some(slot));
    }

    repair_ids(&mut arena, &mut resolver, &mut diagnostics);

    let resolutions = arena
        .iter()
        .map(|slot| Resolution {
            line: slot.line,
            id: slot.id.clone(),
            path: slot.path.clone(),
            confidence: slot.confidence,
        })
        .collect();

    Some(ParsedTree {
        root: assemble(arena, &index),
        root_change,
        resolutions,
        diagnostics,
    })
}

/// Parse and send the diagnostics straight to `sink`.
#[must_use]
pub fn parse_with_sink(
    text: &str,
    original: &TreeNode,
    sink: &dyn DiagnosticSink,
) -> Option<ParsedTree> {
    let parsed = parse(text, original)?;
    parsed.report_to(sink);
    Some(parsed)
}

/// Nearest present level below `level`.
fn find_parent(levels: &[Option<usize>], level: usize) -> Option<usize> {
    (0..level)
        .rev()
        .find_map(|candidate| levels.get(candidate).copied().flatten())
}

fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("empty name")
    } else if name.contains('/') {
        Some("names cannot contain '/'")
    } else {
        None
    }
}

fn repair_ids(
    arena: &mut [Slot],
    resolver: &mut IdentityResolver<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut ids: Vec<NodeId> = arena.iter().map(|slot| slot.id.clone()).collect();
    let lines: Vec<usize> = arena.iter().map(|slot| slot.line).collect();

    for (position, duplicate, replacement) in resolver.repair_duplicates(&mut ids, &lines) {
        log::warn!("duplicate id {duplicate} replaced with {replacement}");
        let slot = &mut arena[position];
        slot.id = replacement.clone();
        slot.confidence = MatchConfidence::Repaired;
        diagnostics.push(Diagnostic::new(
            slot.line,
            DiagnosticKind::IdCollisionRepaired {
                duplicate,
                replacement,
            },
        ));
    }
}

/// Turn the arena into an owned tree, annotating moved nodes.
///
/// Slot 0 is the root, pushed before any line is read. Children always sit
/// at higher indices than their parent, so building the descendants from the
/// back finishes every child before its parent.
fn assemble(mut arena: Vec<Slot>, index: &PathIndex) -> TreeNode {
    let descendants = arena.split_off(1);
    let mut built: Vec<Option<TreeNode>> = Vec::with_capacity(descendants.len() + 1);
    built.resize_with(descendants.len() + 1, || None);

    for (offset, mut slot) in descendants.into_iter().enumerate().rev() {
        let path = std::mem::take(&mut slot.path);
        let mut node = build_node(slot, &mut built);

        if let Some(old_path) = index.path_of(&node.id) {
            if old_path != path {
                node.old_path = Some(old_path.to_string());
                node.new_path = Some(path);
            }
        }

        built[offset + 1] = Some(node);
    }

    let root = arena.swap_remove(0);
    build_node(root, &mut built)
}

fn build_node(slot: Slot, built: &mut [Option<TreeNode>]) -> TreeNode {
    let children = slot
        .children
        .iter()
        .filter_map(|&child| built[child].take())
        .collect();

    if slot.is_dir {
        TreeNode::dir(slot.id, slot.name)
    } else {
        TreeNode::file(slot.id, slot.name)
    }
    .with_children(children)
}
