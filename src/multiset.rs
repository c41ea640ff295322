//! Height-balanced ordered multiset used to hold a hand's cards.
//!
//! The container is an AVL tree: equal keys descend to the right, and every
//! insertion rebalances the path back to the root so the height stays within
//! `O(log n)`. Contents are only ever read back as a whole, in ascending
//! order, so there is no removal of single values.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    height: u32,
}

impl<T> Node<T> {
    const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

fn height<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn update_height<T>(node: &mut Node<T>) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

fn balance_factor<T>(node: &Node<T>) -> i64 {
    i64::from(height(&node.left)) - i64::from(height(&node.right))
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    update_height(&mut node);
    let factor = balance_factor(&node);

    if factor > 1 {
        // Left-right case
        if node.left.as_deref().is_some_and(|left| balance_factor(left) < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if factor < -1 {
        // Right-left case
        if node
            .right
            .as_deref()
            .is_some_and(|right| balance_factor(right) > 0)
        {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn insert_node<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    match link {
        None => Box::new(Node::leaf(value)),
        Some(mut node) => {
            if value < node.value {
                node.left = Some(insert_node(node.left.take(), value));
            } else {
                node.right = Some(insert_node(node.right.take(), value));
            }
            rebalance(node)
        }
    }
}

/// An ordered multiset backed by an AVL tree.
#[derive(Debug, Clone)]
pub struct OrderedMultiset<T> {
    root: Link<T>,
    len: usize,
}

impl<T> OrderedMultiset<T> {
    /// Creates an empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of stored values, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the multiset is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the underlying tree (0 when empty).
    #[must_use]
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Discards all contents.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height() as usize),
        };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T: Ord> OrderedMultiset<T> {
    /// Inserts one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        self.root = Some(insert_node(self.root.take(), value));
        self.len += 1;
    }
}

impl<T: Clone> OrderedMultiset<T> {
    /// Materialises the full contents in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for OrderedMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for OrderedMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedMultiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedMultiset`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}
