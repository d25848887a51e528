use espalier::{InOrder, PostOrder, PostOrderIterator, PreOrder, SearchTree, TreeCursor};
use itertools::Itertools;

/// The worked example used throughout: a complete tree of height three.
///
///       5
///      / \
///     3   7
///    / \ / \
///   2  4 6  8
fn sample_tree() -> SearchTree<i32> {
    let mut tree = SearchTree::new();
    for value in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(value);
    }
    tree
}

#[test_log::test]
fn test_all_orders_of_the_sample_tree() {
    let tree = sample_tree();

    assert_eq!(tree.in_order().collect_vec(), [&2, &3, &4, &5, &6, &7, &8]);
    assert_eq!(tree.pre_order().collect_vec(), [&5, &3, &2, &4, &7, &6, &8]);
    assert_eq!(tree.post_order().collect_vec(), [&2, &4, &3, &6, &8, &7, &5]);

    // The order-selecting factory and the dedicated methods agree.
    assert_eq!(
        tree.traversal(InOrder).collect_vec(),
        tree.in_order().collect_vec()
    );
    assert_eq!(
        tree.traversal(PreOrder).collect_vec(),
        tree.pre_order().collect_vec()
    );
    assert_eq!(
        tree.traversal(PostOrder).collect_vec(),
        tree.post_order().collect_vec()
    );
}

#[test_log::test]
fn test_default_iteration_is_in_order() {
    let tree = sample_tree();
    let via_for: Vec<i32> = (&tree).into_iter().copied().collect();
    assert_eq!(via_for, [2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_eager_variant_agrees_with_cursor() {
    let tree = sample_tree();
    assert_eq!(tree.in_order_eager(), tree.in_order().collect_vec());
}

#[test_log::test]
fn test_raw_post_order_cursor_round_trip() {
    let tree = sample_tree();

    // Drive the bidirectional cursor by hand, the way the factories don't.
    let mut cursor = PostOrderIterator::new(&tree, tree.root());
    let mut forward = vec![];
    while cursor.advance() {
        forward.push(*cursor.current().unwrap());
    }
    assert_eq!(forward, [2, 4, 3, 6, 8, 7, 5]);

    let mut backward = vec![];
    while cursor.previous() {
        backward.push(*cursor.current().unwrap());
    }
    assert_eq!(backward, [5, 7, 8, 6, 3, 4, 2]);

    // No predecessor before the first element.
    assert!(!cursor.previous());
    assert!(cursor.current().is_err());
}

#[test]
fn test_duplicate_values() {
    let mut tree = SearchTree::new();
    tree.insert(5);
    tree.insert(5);

    assert_eq!(tree.in_order().collect_vec(), [&5, &5]);
    let root = tree.node(tree.root().unwrap()).unwrap();
    assert!(root.left().is_none());
    assert!(root.right().is_some());
}

#[test]
fn test_traversals_of_empty_tree() {
    let tree: SearchTree<i32> = SearchTree::new();
    assert_eq!(tree.pre_order().count(), 0);
    assert_eq!(tree.in_order().count(), 0);
    assert_eq!(tree.post_order().count(), 0);

    let mut cursor = PostOrderIterator::new(&tree, tree.root());
    assert!(!cursor.previous());
}

#[test]
fn test_insert_while_no_traversal_is_borrowed() {
    let mut tree = sample_tree();
    let before = tree.in_order().copied().collect_vec();
    tree.insert(1);
    let after = tree.in_order().copied().collect_vec();

    assert_eq!(before, [2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(after, [1, 2, 3, 4, 5, 6, 7, 8]);
}
