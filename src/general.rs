//! A general (n-ary) tree. Each [`TreeNode`] owns an ordered list of
//! children and there is no limit on how many children a node can have.
//!
//! # Examples
//!
//! ```
//! use trees::general::TreeNode;
//!
//! //      drinks
//! //     /      \
//! //   hot      cold
//! //  /   \       |
//! // tea coffee water
//! let mut hot = TreeNode::new("hot");
//! hot.add_child(TreeNode::new("tea"));
//! hot.add_child(TreeNode::new("coffee"));
//!
//! let mut cold = TreeNode::new("cold");
//! cold.add_child(TreeNode::new("water"));
//!
//! let drinks = TreeNode::with_children("drinks", vec![hot, cold]);
//!
//! let mut visited = Vec::new();
//! drinks.depth_traversal(|node| visited.push(node.value));
//! assert_eq!(visited, ["drinks", "hot", "tea", "coffee", "cold", "water"]);
//!
//! let mut visited = Vec::new();
//! drinks.breadth_traversal(|node| visited.push(node.value));
//! assert_eq!(visited, ["drinks", "hot", "cold", "tea", "coffee", "water"]);
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::queue::Queue;

/// A node in a general tree. It holds a value and owns its children, so a
/// node can never end up as its own descendant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// The value stored at this node.
    pub value: T,
    /// This node's children, in visiting order.
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Constructs a leaf node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Constructs a node holding `value` with the given children.
    pub fn with_children(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    /// Appends `child` after this node's existing children. Returns `self` so
    /// calls can be chained.
    pub fn add_child(&mut self, child: TreeNode<T>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        self.children.iter().map(Self::height).max().unwrap_or(0) + 1
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn size(&self) -> usize {
        self.iter_depth().count()
    }

    /// Calls `visit` on this node and then, recursively, on each child's
    /// subtree in order (pre-order). Every node is visited before any of its
    /// descendants.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::general::TreeNode;
    ///
    /// let tree = TreeNode::with_children(
    ///     1,
    ///     vec![TreeNode::with_children(2, vec![TreeNode::new(3)]), TreeNode::new(4)],
    /// );
    ///
    /// let mut visited = Vec::new();
    /// tree.depth_traversal(|node| visited.push(node.value));
    /// assert_eq!(visited, [1, 2, 3, 4]);
    /// ```
    pub fn depth_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&TreeNode<T>),
    {
        trace!(children = self.children.len(), "depth-first traversal");
        self.depth_visit(&mut visit);
    }

    fn depth_visit<F>(&self, visit: &mut F)
    where
        F: FnMut(&TreeNode<T>),
    {
        visit(self);
        for child in &self.children {
            child.depth_visit(visit);
        }
    }

    /// Calls `visit` on every node one level at a time: this node, then its
    /// children left to right, then their children, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::general::TreeNode;
    ///
    /// let tree = TreeNode::with_children(
    ///     1,
    ///     vec![TreeNode::with_children(2, vec![TreeNode::new(3)]), TreeNode::new(4)],
    /// );
    ///
    /// let mut visited = Vec::new();
    /// tree.breadth_traversal(|node| visited.push(node.value));
    /// assert_eq!(visited, [1, 2, 4, 3]);
    /// ```
    pub fn breadth_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&TreeNode<T>),
    {
        visit(self);
        let mut queue: Queue<_> = self.children.iter().collect();

        while let Some(node) = queue.dequeue() {
            trace!(queued = queue.len(), "breadth-first visit");
            visit(node);
            queue.extend(&node.children);
        }
    }

    /// A lazy version of [`depth_traversal`][Self::depth_traversal]. Uses an
    /// explicit stack instead of recursion.
    pub fn iter_depth(&self) -> DepthFirst<'_, T> {
        DepthFirst { stack: vec![self] }
    }

    /// A lazy version of [`breadth_traversal`][Self::breadth_traversal].
    pub fn iter_breadth(&self) -> BreadthFirst<'_, T> {
        BreadthFirst {
            queue: std::iter::once(self).collect(),
        }
    }
}

/// Iterator over a general tree in pre-order. See [`TreeNode::iter_depth`].
#[derive(Debug)]
pub struct DepthFirst<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is on top of the stack.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<T> FusedIterator for DepthFirst<'_, T> {}

/// Iterator over a general tree in level order. See [`TreeNode::iter_breadth`].
#[derive(Debug)]
pub struct BreadthFirst<'a, T> {
    queue: Queue<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        self.queue.extend(&node.children);
        Some(node)
    }
}

impl<T> FusedIterator for BreadthFirst<'_, T> {}
