//! This crate exposes generic tree nodes and the classic ways of walking
//! them, mostly for educational purposes.
//!
//! ## Trees
//!
//! Like a linked list, a tree is made of nodes. The node everything hangs
//! off is the *root* and a node without any children is a *leaf*. Every node
//! except the root has exactly one parent.
//!
//! ```text
//!         2 <- root
//!        / \
//! leaf  3   5
//!           |
//!           7 <- leaf
//! ```
//!
//! In a [general tree][general::TreeNode] there is no limit on the number of
//! children a node can have. A [binary tree][binary::BinaryTreeNode] has at
//! most two, a left child and a right child.
//!
//! ## Traversals
//!
//! There are two broad ways to visit every node of a tree:
//!
//! 1. **Depth first.** Follow one path all the way down before backing up to
//!    a sibling. This is naturally recursive. Binary trees get three flavours
//!    of it depending on when a node is visited relative to its subtrees:
//!    pre-order (self, left, right), in-order (left, self, right) and
//!    post-order (left, right, self).
//! 2. **Breadth first** (level order). Visit the root, then everything one
//!    level down from left to right, and so on. This uses a
//!    [`Queue`][queue::Queue].
//!
//! Every traversal takes a closure that is called once per node, and has a
//! lazy iterator counterpart yielding the same nodes in the same order.
//!
//! ```
//! use trees::samples;
//!
//! let tree = samples::binary_family();
//!
//! let mut in_order = Vec::new();
//! tree.in_order_traversal(|node| in_order.push(node.value));
//!
//! let lazy: Vec<_> = tree.iter_in_order().map(|node| node.value).collect();
//! assert_eq!(in_order, lazy);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod general;
pub mod queue;
pub mod samples;
