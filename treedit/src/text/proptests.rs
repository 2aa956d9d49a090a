//! Property-based tests for formatting and parsing.

use std::collections::HashSet;

use proptest::prelude::*;

use super::{extract_name, format_tree, nesting_level, parse};
use crate::tree::TreeNode;

// Names that never look like a connector or carry a slash.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

// Arbitrary trees with unique ids. Ids are assigned after generation so they
// stay unique regardless of shape.
fn tree_strategy() -> impl Strategy<Value = TreeNode> {
    let leaf = (name_strategy(), any::<bool>())
        .prop_map(|(name, is_dir)| TreeNode {
            is_dir,
            ..TreeNode::file("", name)
        });

    leaf.prop_recursive(4, 48, 6, |inner| {
        (name_strategy(), prop::collection::vec(inner, 0..6))
            .prop_map(|(name, children)| TreeNode::dir("", name).with_children(children))
    })
    .prop_map(|mut root| {
        root.is_dir = true;
        assign_ids(&mut root, &mut 0);
        root
    })
}

fn assign_ids(node: &mut TreeNode, next: &mut usize) {
    node.id = format!("id-{next}").into();
    *next += 1;
    for child in &mut node.children {
        assign_ids(child, next);
    }
}

fn collect_ids(tree: &TreeNode) -> Vec<String> {
    let mut ids = Vec::new();
    tree.walk(|node, _| ids.push(node.id.to_string()));
    ids
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Formatting then parsing against the same snapshot is the identity
    #[test]
    fn format_then_parse_is_identity(tree in tree_strategy()) {
        let text = format_tree(&tree);
        let parsed = parse(&text, &tree).unwrap();

        prop_assert_eq!(&parsed.root, &tree);
        prop_assert!(parsed.diagnostics.is_empty());
        prop_assert!(parsed.moves().is_empty());
    }

    // Every rendered line ends with a newline and there is one line per node
    #[test]
    fn format_emits_one_line_per_node(tree in tree_strategy()) {
        let text = format_tree(&tree);
        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text.lines().count(), tree.node_count());
    }

    // Rendered levels match tree depth
    #[test]
    fn rendered_levels_match_depth(tree in tree_strategy()) {
        let text = format_tree(&tree);
        let mut depths = Vec::new();
        tree.walk(|_, depth| depths.push(depth));

        for (line, depth) in text.lines().zip(depths).skip(1) {
            prop_assert_eq!(nesting_level(line), depth);
        }
    }

    // Rendered names come back unchanged
    #[test]
    fn rendered_names_round_trip(tree in tree_strategy()) {
        let text = format_tree(&tree);
        let mut expected = Vec::new();
        tree.walk(|node, _| expected.push((node.name.clone(), node.is_dir)));

        for (line, (name, is_dir)) in text.lines().zip(expected).skip(1) {
            prop_assert_eq!(extract_name(line), (name.as_str(), is_dir));
        }
    }

    // Parsed ids are unique whatever the text looks like
    #[test]
    fn parsed_ids_are_unique(
        tree in tree_strategy(),
        extra in prop::collection::vec((0usize..6, name_strategy()), 0..20)
    ) {
        let mut text = format_tree(&tree);
        for (depth, name) in extra {
            text.push_str(&" ".repeat(depth * 4));
            text.push_str(&name);
            text.push('\n');
        }

        let parsed = parse(&text, &tree).unwrap();
        let ids = collect_ids(&parsed.root);
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }

    // Reordering siblings keeps every id and records no moves
    #[test]
    fn reversing_children_keeps_ids(tree in tree_strategy()) {
        let mut reversed = tree.clone();
        reversed.children.reverse();

        let parsed = parse(&format_tree(&reversed), &tree).unwrap();
        let mut before = collect_ids(&tree);
        let mut after = collect_ids(&parsed.root);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
