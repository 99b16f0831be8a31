//! Hand-built sample trees. These are handy for trying out the traversals and
//! are what the tests and benchmarks use as known fixtures.

use crate::binary::BinaryTreeNode;
use crate::general::TreeNode;

/// A general tree of the Maitree family:
///
/// ```text
///                  Maitree
///                 /       \
///          Cheltree         Keltree
///          /  |  \        / |  |  | \
///         J   L   Y      B  C  J Ta Ti
/// ```
///
/// Cheltree's children are Juantree, Lutree and Yulitree. Keltree's are
/// Brentree, Camtree, Jaheetree, Tantree and Tiffatree.
///
/// # Examples
///
/// ```
/// use trees::samples;
///
/// let tree = samples::family();
/// assert_eq!(tree.value, "Maitree");
/// assert_eq!(tree.children.len(), 2);
/// assert_eq!(tree.size(), 11);
/// ```
pub fn family() -> TreeNode<&'static str> {
    let mut cheltree = TreeNode::new("Cheltree");
    cheltree
        .add_child(TreeNode::new("Juantree"))
        .add_child(TreeNode::new("Lutree"))
        .add_child(TreeNode::new("Yulitree"));

    let mut keltree = TreeNode::new("Keltree");
    keltree
        .add_child(TreeNode::new("Brentree"))
        .add_child(TreeNode::new("Camtree"))
        .add_child(TreeNode::new("Jaheetree"))
        .add_child(TreeNode::new("Tantree"))
        .add_child(TreeNode::new("Tiffatree"));

    let mut root = TreeNode::new("Maitree");
    root.add_child(cheltree).add_child(keltree);
    root
}

/// A binary tree of the Maitree family:
///
/// ```text
///              Maitree
///             /       \
///       Cheltree      Keltree
///       /     \       /     \
///  Juantree Lutree Brentree Tiffatree
/// ```
pub fn binary_family() -> BinaryTreeNode<&'static str> {
    let cheltree = BinaryTreeNode::new("Cheltree")
        .with_left(BinaryTreeNode::new("Juantree"))
        .with_right(BinaryTreeNode::new("Lutree"));
    let keltree = BinaryTreeNode::new("Keltree")
        .with_left(BinaryTreeNode::new("Brentree"))
        .with_right(BinaryTreeNode::new("Tiffatree"));

    BinaryTreeNode::new("Maitree")
        .with_left(cheltree)
        .with_right(keltree)
}

/// A complete binary tree with `num_levels` full levels holding the values
/// `0..2^num_levels - 1` in sorted (in-order) position. Returns `None` for
/// zero levels.
///
/// ## Panics
///
/// When `num_levels` is 32 or more.
///
/// # Examples
///
/// ```
/// use trees::samples;
///
/// let tree = samples::full_binary(3).unwrap();
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.size(), 7);
/// assert!(tree.is_search_tree());
///
/// assert!(samples::full_binary(0).is_none());
/// ```
pub fn full_binary(num_levels: u32) -> Option<BinaryTreeNode<u32>> {
    let num_nodes = 2u32.pow(num_levels) - 1;
    fill_binary(0, num_nodes)
}

/// Recursive helper for [`full_binary`]. Builds a tree out of `start..end`.
fn fill_binary(start: u32, end: u32) -> Option<BinaryTreeNode<u32>> {
    if start >= end {
        return None;
    }

    let mid = start + (end - start) / 2;
    Some(BinaryTreeNode {
        value: mid,
        left: fill_binary(start, mid).map(Box::new),
        right: fill_binary(mid + 1, end).map(Box::new),
    })
}

/// A general tree where every non-leaf node has `branching` children and
/// there are `num_levels` levels. Values are assigned in level order starting
/// at 0. Returns `None` for zero levels.
///
/// # Examples
///
/// ```
/// use trees::samples;
///
/// let tree = samples::full_general(3, 3).unwrap();
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.size(), 1 + 3 + 9);
///
/// let level_order: Vec<_> = tree.iter_breadth().map(|node| node.value).collect();
/// assert_eq!(level_order, (0..13).collect::<Vec<_>>());
/// ```
pub fn full_general(num_levels: u32, branching: usize) -> Option<TreeNode<usize>> {
    if num_levels == 0 {
        return None;
    }

    Some(fill_general(0, 1, num_levels, branching))
}

/// Recursive helper for [`full_general`]. A node with level order index `i`
/// has children `i * branching + 1 ..= i * branching + branching`.
fn fill_general(index: usize, level: u32, num_levels: u32, branching: usize) -> TreeNode<usize> {
    let children = if level < num_levels {
        (1..=branching)
            .map(|offset| {
                fill_general(index * branching + offset, level + 1, num_levels, branching)
            })
            .collect()
    } else {
        Vec::new()
    };

    TreeNode::with_children(index, children)
}
