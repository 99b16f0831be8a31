//! A binary tree. Each [`BinaryTreeNode`] has at most two children, a left
//! one and a right one. Because of that it supports three depth-first
//! orders (pre-order, in-order and post-order) on top of breadth-first.
//!
//! # Examples
//!
//! ```
//! use trees::binary::BinaryTreeNode;
//!
//! //     2
//! //    / \
//! //   1   3
//! let tree = BinaryTreeNode::new(2)
//!     .with_left(BinaryTreeNode::new(1))
//!     .with_right(BinaryTreeNode::new(3));
//!
//! let mut visited = Vec::new();
//! tree.in_order_traversal(|node| visited.push(node.value));
//! assert_eq!(visited, [1, 2, 3]);
//!
//! // The lazy forms give the same orders.
//! let pre_order: Vec<_> = tree.iter_pre_order().map(|node| node.value).collect();
//! assert_eq!(pre_order, [2, 1, 3]);
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::queue::Queue;

/// A node in a binary tree. Absent children are `None`. Children are owned
/// so a node can never end up as its own descendant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryTreeNode<T> {
    /// The value stored at this node.
    pub value: T,
    /// The left child, if any.
    pub left: Option<Box<BinaryTreeNode<T>>>,
    /// The right child, if any.
    pub right: Option<Box<BinaryTreeNode<T>>>,
}

impl<T> BinaryTreeNode<T> {
    /// Constructs a node without children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns this node with `child` as its left child, replacing any
    /// existing left child.
    pub fn with_left(self, child: BinaryTreeNode<T>) -> Self {
        Self {
            left: Some(Box::new(child)),
            ..self
        }
    }

    /// Returns this node with `child` as its right child, replacing any
    /// existing right child.
    pub fn with_right(self, child: BinaryTreeNode<T>) -> Self {
        Self {
            right: Some(Box::new(child)),
            ..self
        }
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn size(&self) -> usize {
        self.iter_pre_order().count()
    }

    /// Visits this node, then the left subtree, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::samples;
    ///
    /// let mut visited = Vec::new();
    /// samples::binary_family().pre_order_traversal(|node| visited.push(node.value));
    /// assert_eq!(
    ///     visited,
    ///     ["Maitree", "Cheltree", "Juantree", "Lutree", "Keltree", "Brentree", "Tiffatree"]
    /// );
    /// ```
    pub fn pre_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        trace!("pre-order traversal");
        self.pre_order_visit(&mut visit);
    }

    fn pre_order_visit<F>(&self, visit: &mut F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        visit(self);
        if let Some(left) = self.left() {
            left.pre_order_visit(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order_visit(visit);
        }
    }

    /// Visits the left subtree, then this node, then the right subtree. For a
    /// binary search tree this visits the values in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::samples;
    ///
    /// let mut visited = Vec::new();
    /// samples::binary_family().in_order_traversal(|node| visited.push(node.value));
    /// assert_eq!(
    ///     visited,
    ///     ["Juantree", "Cheltree", "Lutree", "Maitree", "Brentree", "Keltree", "Tiffatree"]
    /// );
    /// ```
    pub fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        trace!("in-order traversal");
        self.in_order_visit(&mut visit);
    }

    fn in_order_visit<F>(&self, visit: &mut F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        if let Some(left) = self.left() {
            left.in_order_visit(visit);
        }
        visit(self);
        if let Some(right) = self.right() {
            right.in_order_visit(visit);
        }
    }

    /// Visits the left subtree, then the right subtree, then this node.
    pub fn post_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        trace!("post-order traversal");
        self.post_order_visit(&mut visit);
    }

    fn post_order_visit<F>(&self, visit: &mut F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        if let Some(left) = self.left() {
            left.post_order_visit(visit);
        }
        if let Some(right) = self.right() {
            right.post_order_visit(visit);
        }
        visit(self);
    }

    /// Visits every node one level at a time, left child before right child.
    /// Each node, this one included, is visited exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::samples;
    ///
    /// let mut visited = Vec::new();
    /// samples::binary_family().breadth_first_traversal(|node| visited.push(node.value));
    /// assert_eq!(
    ///     visited,
    ///     ["Maitree", "Cheltree", "Keltree", "Juantree", "Lutree", "Brentree", "Tiffatree"]
    /// );
    /// ```
    pub fn breadth_first_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&BinaryTreeNode<T>),
    {
        let mut queue = Queue::new();
        queue.enqueue(self);

        while let Some(node) = queue.dequeue() {
            trace!(queued = queue.len(), "breadth-first visit");
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// A lazy version of [`pre_order_traversal`][Self::pre_order_traversal].
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder { stack: vec![self] }
    }

    /// A lazy version of [`in_order_traversal`][Self::in_order_traversal].
    pub fn iter_in_order(&self) -> InOrder<'_, T> {
        InOrder {
            stack: Vec::new(),
            next_left_path: Some(self),
        }
    }

    /// A lazy version of [`post_order_traversal`][Self::post_order_traversal].
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: vec![(self, false)],
        }
    }

    /// A lazy version of
    /// [`breadth_first_traversal`][Self::breadth_first_traversal].
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_, T> {
        BreadthFirst {
            queue: std::iter::once(self).collect(),
        }
    }

    /// Whether the values of this tree satisfy the binary search tree
    /// invariant: everything in a node's left subtree is less than the node's
    /// value and everything in its right subtree is greater. Equivalently, the
    /// in-order sequence is strictly increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::binary::BinaryTreeNode;
    ///
    /// let ordered = BinaryTreeNode::new(2)
    ///     .with_left(BinaryTreeNode::new(1))
    ///     .with_right(BinaryTreeNode::new(3));
    /// assert!(ordered.is_search_tree());
    ///
    /// let unordered = BinaryTreeNode::new(2).with_left(BinaryTreeNode::new(3));
    /// assert!(!unordered.is_search_tree());
    /// ```
    pub fn is_search_tree(&self) -> bool
    where
        T: Ord,
    {
        let mut previous: Option<&T> = None;
        self.iter_in_order().all(|node| {
            let ordered = previous.map_or(true, |previous| *previous < node.value);
            previous = Some(&node.value);
            ordered
        })
    }
}

/// Iterator over a binary tree in pre-order. See
/// [`BinaryTreeNode::iter_pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a BinaryTreeNode<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a BinaryTreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left child is popped next.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Iterator over a binary tree in-order. See
/// [`BinaryTreeNode::iter_in_order`].
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being visited. Each is yielded once its
    /// left subtree is exhausted.
    stack: Vec<&'a BinaryTreeNode<T>>,
    /// The root of a subtree none of whose nodes have been pushed yet.
    next_left_path: Option<&'a BinaryTreeNode<T>>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a BinaryTreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next_left_path {
            self.stack.push(node);
            self.next_left_path = node.left();
        }

        let node = self.stack.pop()?;
        self.next_left_path = node.right();
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Iterator over a binary tree in post-order. See
/// [`BinaryTreeNode::iter_post_order`].
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Pending nodes, paired with whether their children have already been
    /// pushed above them.
    stack: Vec<(&'a BinaryTreeNode<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a BinaryTreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, children_pushed)) = self.stack.pop() {
            if children_pushed {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Iterator over a binary tree in level order. See
/// [`BinaryTreeNode::iter_breadth_first`].
#[derive(Debug)]
pub struct BreadthFirst<'a, T> {
    queue: Queue<&'a BinaryTreeNode<T>>,
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a BinaryTreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for BreadthFirst<'_, T> {}
