//! A minimal first-in-first-out queue. This is what drives the
//! breadth-first (level order) traversals of both kinds of tree.
//!
//! # Examples
//!
//! ```
//! use trees::queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! // Nothing in here yet.
//! assert!(queue.is_empty());
//! assert_eq!(queue.dequeue(), None);
//!
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! // Peeking doesn't remove anything.
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.len(), 2);
//!
//! // Elements come out in the order they went in.
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::collections::VecDeque;
use std::iter::FromIterator;

/// A FIFO queue. There is no capacity bound.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    elements: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Adds an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
    }

    /// Removes the element at the front of the queue and returns it. If the
    /// queue is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::queue::Queue;
    ///
    /// let mut queue: Queue<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), Some(3));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    /// Returns the element at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Whether there are any elements left.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// How many elements are waiting in the queue.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
