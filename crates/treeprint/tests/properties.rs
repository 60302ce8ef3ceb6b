//! Property tests for the layout engine

use proptest::prelude::*;
use treeprint::core::TreeError;
use treeprint::tree::{assign_levels, TreeArena, TreeLayout};
use treeprint::{DigitWidth, Node, RenderConfig, TreePrinter};

/// Trees of at most `max_height` levels with keys in `0..=max_key`
fn arb_tree(max_key: i64, max_height: u32) -> impl Strategy<Value = Node> {
    let leaf = (0..=max_key).prop_map(Node::new);
    leaf.prop_recursive(max_height.saturating_sub(1), 64, 2, move |inner| {
        (
            0..=max_key,
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(key, left, right)| Node::with_children(key, left, right))
    })
}

fn arb_digit_width() -> impl Strategy<Value = DigitWidth> {
    prop_oneof![
        Just(DigitWidth::Two),
        Just(DigitWidth::Three),
        Just(DigitWidth::Four),
    ]
}

fn pow2(exponent: i64) -> i64 {
    if exponent < 0 {
        0
    } else {
        1 << exponent
    }
}

/// Assert that same-level keys never overlap
fn assert_levels_disjoint(tree: &Node, config: RenderConfig) {
    let arena = TreeArena::from_root(tree);
    let levels = assign_levels(&arena, config.digit_width).unwrap();
    let layout = TreeLayout::compute(&arena, &levels, &config).unwrap();
    let width = config.digit_width.width() as i64;

    for level in 0..levels.height() {
        let margins: Vec<i64> = levels
            .nodes_at(level)
            .iter()
            .map(|id| layout.margin(*id))
            .collect();
        for pair in margins.windows(2) {
            assert!(
                pair[0] + width <= pair[1],
                "level {} overlaps: {:?}",
                level,
                margins
            );
        }
    }
}

proptest! {
    #[test]
    fn render_is_idempotent(tree in arb_tree(99, 6), width in arb_digit_width()) {
        let printer = TreePrinter::with_config(RenderConfig::new(width, 6));
        prop_assert_eq!(
            printer.render(Some(&tree)).unwrap(),
            printer.render(Some(&tree)).unwrap()
        );
    }

    #[test]
    fn line_count_follows_effective_height(
        tree in arb_tree(99, 6),
        max_levels in 6usize..=8,
    ) {
        let lines = TreePrinter::with_config(RenderConfig::new(DigitWidth::Two, max_levels))
            .render(Some(&tree))
            .unwrap();

        let height = tree.height() as i64;
        let effective = height - 1 - i64::from(height == max_levels as i64);
        let edge_lines: i64 = (0..height - 1)
            .map(|level| (pow2(effective - level) - 1).max(0))
            .sum();
        prop_assert_eq!(lines.len() as i64, height + edge_lines + 1);
        prop_assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn lines_never_end_with_blanks(tree in arb_tree(999, 5)) {
        let lines = TreePrinter::with_config(RenderConfig::new(DigitWidth::Three, 6))
            .render(Some(&tree))
            .unwrap();
        for line in &lines {
            prop_assert_eq!(line.trim_end(), line.as_str());
        }
    }

    #[test]
    fn two_digit_levels_never_overlap(tree in arb_tree(99, 6), headroom in 0usize..=2) {
        // No headroom means the tree sits exactly at the ceiling
        let max_levels = tree.height() + headroom;
        assert_levels_disjoint(&tree, RenderConfig::new(DigitWidth::Two, max_levels));
    }

    #[test]
    fn three_digit_levels_never_overlap_below_ceiling(tree in arb_tree(999, 5)) {
        assert_levels_disjoint(&tree, RenderConfig::new(DigitWidth::Three, 6));
    }

    #[test]
    fn out_of_range_root_key_is_rejected(
        tree in arb_tree(99, 4),
        width in arb_digit_width(),
        excess in 1i64..1000,
    ) {
        let bad_key = width.max_key() + excess;
        let root = Node::with_children(
            bad_key,
            tree.left().cloned(),
            tree.right().cloned(),
        );
        let result = TreePrinter::with_config(RenderConfig::new(width, 6)).render(Some(&root));
        prop_assert!(
            matches!(result, Err(TreeError::OutOfRangeKey { key, .. }) if key == bad_key),
            "unexpected result {:?}",
            result
        );
    }

    #[test]
    fn trees_taller_than_ceiling_are_rejected(subtree in arb_tree(99, 6)) {
        let tree = Node::new(1).with_left(subtree);
        let height = tree.height();
        let result = TreePrinter::with_config(RenderConfig::new(DigitWidth::Two, height - 1))
            .render(Some(&tree));
        prop_assert!(
            matches!(result, Err(TreeError::TreeTooDeep { actual, max }) if actual == height && max == height - 1),
            "unexpected result {:?}",
            result
        );
    }
}
