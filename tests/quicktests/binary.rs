use trees::binary::BinaryTreeNode;

use std::cmp;
use std::collections::{BTreeSet, HashMap};

use crate::init_tracing;

/// Inserts `key` under `node` where a binary search tree would put it,
/// recording the depth it lands at. Duplicates are ignored.
fn insert(node: &mut BinaryTreeNode<i8>, key: i8, depth: usize, depths: &mut HashMap<i8, usize>) {
    let slot = match key.cmp(&node.value) {
        cmp::Ordering::Less => &mut node.left,
        cmp::Ordering::Equal => return,
        cmp::Ordering::Greater => &mut node.right,
    };

    match slot {
        Some(child) => insert(child, key, depth + 1, depths),
        None => {
            *slot = Some(Box::new(BinaryTreeNode::new(key)));
            depths.insert(key, depth + 1);
        }
    }
}

/// Builds a search tree out of `root` followed by `keys`, returning the depth
/// of each key alongside it.
fn build(root: i8, keys: &[i8]) -> (BinaryTreeNode<i8>, HashMap<i8, usize>) {
    let mut tree = BinaryTreeNode::new(root);
    let mut depths = HashMap::new();
    depths.insert(root, 0);
    for &key in keys {
        insert(&mut tree, key, 0, &mut depths);
    }

    (tree, depths)
}

fn values<'a>(nodes: impl Iterator<Item = &'a BinaryTreeNode<i8>>) -> Vec<i8> {
    nodes.map(|node| node.value).collect()
}

macro_rules! visited {
    ($tree:expr, $traversal:ident) => {{
        let mut visited = Vec::new();
        $tree.$traversal(|node| visited.push(node.value));
        visited
    }};
}

#[quickcheck]
fn in_order_of_search_tree_is_sorted(root: i8, keys: Vec<i8>) -> bool {
    init_tracing();
    let (tree, _) = build(root, &keys);

    let expected: Vec<_> = keys
        .iter()
        .copied()
        .chain(Some(root))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    visited!(tree, in_order_traversal) == expected && tree.is_search_tree()
}

#[quickcheck]
fn pre_order_starts_and_post_order_ends_at_root(root: i8, keys: Vec<i8>) -> bool {
    let (tree, _) = build(root, &keys);

    let pre_order = visited!(tree, pre_order_traversal);
    let post_order = visited!(tree, post_order_traversal);

    pre_order.first() == Some(&root) && post_order.last() == Some(&root)
}

#[quickcheck]
fn post_order_is_mirrored_pre_order(root: i8, keys: Vec<i8>) -> bool {
    let (tree, _) = build(root, &keys);

    // Post-order is the reverse of a pre-order that visits right before left.
    let mut mirrored = Vec::new();
    let mut stack = vec![&tree];
    while let Some(node) = stack.pop() {
        mirrored.push(node.value);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    mirrored.reverse();

    visited!(tree, post_order_traversal) == mirrored
}

#[quickcheck]
fn breadth_first_visits_level_by_level(root: i8, keys: Vec<i8>) -> bool {
    init_tracing();
    let (tree, depths) = build(root, &keys);

    let visited = visited!(tree, breadth_first_traversal);
    let levels_in_order = visited
        .windows(2)
        .all(|pair| depths[&pair[0]] <= depths[&pair[1]]);

    levels_in_order && visited.len() == depths.len() && visited.first() == Some(&root)
}

#[quickcheck]
fn traversals_are_repeatable(root: i8, keys: Vec<i8>) -> bool {
    let (tree, _) = build(root, &keys);

    let first = [
        visited!(tree, pre_order_traversal),
        visited!(tree, in_order_traversal),
        visited!(tree, post_order_traversal),
        visited!(tree, breadth_first_traversal),
    ];
    let second = [
        visited!(tree, pre_order_traversal),
        visited!(tree, in_order_traversal),
        visited!(tree, post_order_traversal),
        visited!(tree, breadth_first_traversal),
    ];

    first == second
}

#[quickcheck]
fn iterators_agree_with_callbacks(root: i8, keys: Vec<i8>) -> bool {
    let (tree, _) = build(root, &keys);

    values(tree.iter_pre_order()) == visited!(tree, pre_order_traversal)
        && values(tree.iter_in_order()) == visited!(tree, in_order_traversal)
        && values(tree.iter_post_order()) == visited!(tree, post_order_traversal)
        && values(tree.iter_breadth_first()) == visited!(tree, breadth_first_traversal)
}
