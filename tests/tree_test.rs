//! Tests for construction, traversal and removal on built trees

use rstest::rstest;

use bfstree::domain::{Node, Removal, RemovalOutcome, Tree, TreeBuilder};
use bfstree::util::testing;

fn build(values: &[i32]) -> Tree {
    testing::init_test_setup();
    TreeBuilder::new().build(values).expect("non-empty input builds")
}

fn check_levels(node: &Node, ancestors: usize) {
    assert_eq!(node.level, ancestors, "level of {}", node.value);
    for child in node.children() {
        check_levels(child, ancestors + 1);
    }
}

/// Level-order position of every node must follow the 2i+1 / 2i+2 rule.
fn check_heap_shape(tree: &Tree, values: &[i32]) {
    let nodes: Vec<&Node> = tree.level_order().collect();
    for (i, node) in nodes.iter().enumerate() {
        assert_eq!(node.left.as_ref().map(|n| n.value), values.get(2 * i + 1).copied());
        assert_eq!(node.right.as_ref().map(|n| n.value), values.get(2 * i + 2).copied());
    }
}

// ============================================================
// Construction
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(7)]
#[case(8)]
#[case(15)]
#[case(16)]
#[case(100)]
fn given_n_values_when_building_then_breadth_first_reproduces_input(#[case] n: i32) {
    let values: Vec<i32> = (0..n).map(|v| v * 3 - 7).collect();

    let tree = build(&values);

    assert_eq!(tree.len(), values.len());
    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), values);
    check_heap_shape(&tree, &values);
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 2)]
#[case(4, 3)]
#[case(7, 3)]
#[case(8, 4)]
#[case(31, 5)]
#[case(32, 6)]
fn given_n_values_when_building_then_levels_match_ancestor_count(
    #[case] n: i32,
    #[case] depth: usize,
) {
    let values: Vec<i32> = (1..=n).collect();

    let tree = build(&values);

    check_levels(tree.root().unwrap(), 0);
    assert_eq!(tree.depth(), depth);
}

// ============================================================
// Traversals
// ============================================================

#[test]
fn given_one_to_five_when_traversing_then_matches_known_orders() {
    let tree = build(&[1, 2, 3, 4, 5]);

    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(tree.depth_first(), vec![1, 2, 4, 5, 3]);
}

#[test]
fn given_negative_values_when_traversing_then_order_is_positional() {
    let tree = build(&[-1, -20, 300, 0]);

    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), vec![-1, -20, 300, 0]);
    assert_eq!(tree.depth_first(), vec![-1, -20, 0, 300]);
}

// ============================================================
// Removal
// ============================================================

#[test]
fn given_one_to_five_when_removing_two_then_level_one_and_only_one_three_remain() {
    let mut tree = build(&[1, 2, 3, 4, 5]);

    let outcome = tree.remove(2);

    assert!(matches!(
        outcome,
        RemovalOutcome::Removed(Removal { value: 2, level: 1, .. })
    ));
    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(tree.depth_first(), vec![1, 3]);
}

#[test]
fn given_single_node_when_removing_root_then_traversals_are_empty() {
    let mut tree = build(&[5]);

    let outcome = tree.remove(5);

    assert!(matches!(
        outcome,
        RemovalOutcome::Removed(Removal { level: 0, .. })
    ));
    assert!(tree.is_empty());
    assert_eq!(tree.breadth_first().count(), 0);
    assert!(tree.depth_first().is_empty());
}

#[rstest]
#[case(5)]
#[case(1)]
#[case(-9)]
fn given_removed_root_when_removing_again_then_reports_empty_tree(#[case] target: i32) {
    let mut tree = build(&[5, 6, 7]);
    tree.remove(5);

    assert_eq!(tree.remove(target), RemovalOutcome::EmptyTree);
    assert!(tree.is_empty());
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(-1)]
fn given_absent_value_when_removing_then_breadth_first_unchanged(#[case] target: i32) {
    let mut tree = build(&[1, 2, 3, 4, 5]);
    let before: Vec<i32> = tree.breadth_first().collect();

    assert_eq!(tree.remove(target), RemovalOutcome::NotFound);
    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), before);
    assert_eq!(tree.len(), 5);
}

#[test]
fn given_duplicate_values_when_removing_then_first_in_level_order_goes() {
    // 1 -> (4, 2), 4 -> (3, 4)
    let mut tree = build(&[1, 4, 2, 3, 4]);

    let outcome = tree.remove(4);

    assert!(matches!(
        outcome,
        RemovalOutcome::Removed(Removal { level: 1, released: 3, .. })
    ));
    assert_eq!(tree.breadth_first().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn given_successive_removals_when_counting_then_len_tracks_reachable_nodes() {
    let mut tree = build(&(1..=15).collect::<Vec<_>>());

    tree.remove(3);
    assert_eq!(tree.len(), 8);
    tree.remove(9);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.len(), tree.breadth_first().count());

    // detached nodes are gone for good
    assert_eq!(tree.remove(7), RemovalOutcome::NotFound);
}
