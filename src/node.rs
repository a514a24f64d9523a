//! A single cell of a Binary Search Tree. A [`Node`] owns its children and caches the height
//! and size of the subtree rooted at it.
//!
//! Children can only be attached through [`Node::set_left`] and [`Node::set_right`], which
//! refuse any child that would break the ordering between a parent and its direct child and
//! recompute the cached height and count on success. Those caches are local: a parent does not
//! learn about a change below it until its own child is set again, so whoever restructures a
//! subtree must reattach it on the way back up.
//!
//! # Examples
//!
//! ```
//! use bst::Node;
//!
//! let mut root = Node::new(5).unwrap();
//! root.set_left(Some(Box::new(Node::new(3).unwrap()))).unwrap();
//!
//! assert_eq!(root.height(), 2);
//! assert_eq!(root.count(), 2);
//! assert_eq!(root.balance_factor(), 1);
//!
//! // Equal keys are never accepted as children.
//! assert!(root.set_right(Some(Box::new(Node::new(5).unwrap()))).is_err());
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::key::Key;

/// An owned, possibly absent, subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A key and its two (optional) children.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
    /// How many nodes are in the subtree rooted at this node, itself included.
    count: usize,
}

impl<K: Key> Node<K> {
    /// Construct a leaf holding `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] when `key` is not a finite number.
    pub fn new(key: K) -> Result<Self> {
        Self::with_children(key, None, None)
    }

    /// Construct a node holding `key` with the given children already attached. Only the
    /// relative order of the two children is checked here.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKey`] when `key` is not a finite number.
    /// - [`Error::UnorderedChildren`] when both children are present and the left one has the
    ///   larger key.
    pub fn with_children(key: K, left: Link<K>, right: Link<K>) -> Result<Self> {
        if !key.is_valid() {
            return Err(Error::InvalidKey(key.to_string()));
        }
        if let (Some(l), Some(r)) = (&left, &right) {
            if l.key.compare(&r.key) == Ordering::Greater {
                return Err(Error::UnorderedChildren {
                    left: l.key.to_string(),
                    right: r.key.to_string(),
                });
            }
        }

        let mut node = Self {
            key,
            left,
            right,
            height: 1,
            count: 1,
        };
        node.fix_height();
        Ok(node)
    }

    /// Fails unless a node holding `key` could be this node's left child.
    pub fn check_left(&self, key: &K) -> Result<()> {
        match key.compare(&self.key) {
            Ordering::Less => Ok(()),
            _ => Err(Error::LeftNotLess {
                child: key.to_string(),
                parent: self.key.to_string(),
            }),
        }
    }

    /// Fails unless a node holding `key` could be this node's right child.
    pub fn check_right(&self, key: &K) -> Result<()> {
        match key.compare(&self.key) {
            Ordering::Greater => Ok(()),
            _ => Err(Error::RightNotGreater {
                child: key.to_string(),
                parent: self.key.to_string(),
            }),
        }
    }

    /// Replaces the left child and returns the one it displaced. Nothing changes on failure.
    ///
    /// # Errors
    ///
    /// [`Error::LeftNotLess`] when `node`'s key is not strictly less than this node's key.
    pub fn set_left(&mut self, node: Link<K>) -> Result<Link<K>> {
        if let Some(n) = &node {
            self.check_left(&n.key)?;
        }
        let old = std::mem::replace(&mut self.left, node);
        self.fix_height();
        Ok(old)
    }

    /// Replaces the right child and returns the one it displaced. Nothing changes on failure.
    ///
    /// # Errors
    ///
    /// [`Error::RightNotGreater`] when `node`'s key is not strictly greater than this node's
    /// key.
    pub fn set_right(&mut self, node: Link<K>) -> Result<Link<K>> {
        if let Some(n) = &node {
            self.check_right(&n.key)?;
        }
        let old = std::mem::replace(&mut self.right, node);
        self.fix_height();
        Ok(old)
    }

    /// Detaches and returns the left child.
    pub fn take_left(&mut self) -> Link<K> {
        let old = self.left.take();
        self.fix_height();
        old
    }

    /// Detaches and returns the right child.
    pub fn take_right(&mut self) -> Link<K> {
        let old = self.right.take();
        self.fix_height();
        old
    }

    /// Overwrites this node's key in place. Only used when a deleted node takes over its
    /// in-order successor's key, so the caller guarantees the key still fits between the
    /// children.
    pub(crate) fn replace_key(&mut self, key: K) -> K {
        std::mem::replace(&mut self.key, key)
    }
}

impl<K> Node<K> {
    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Levels in the subtree rooted here; 1 for a leaf.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Nodes in the subtree rooted here, this one included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The left subtree's height minus the right subtree's height. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }

    /// Adjusts the height and count of `self` from its children's cached values.
    fn fix_height(&mut self) {
        let (left, right) = (self.left(), self.right());
        let new_height = height(left).max(height(right)) + 1;
        let new_count = count(left) + count(right) + 1;

        self.height = new_height;
        self.count = new_count;
    }
}

/// Height of a possibly absent subtree.
pub(crate) fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, Node::height)
}

/// Size of a possibly absent subtree.
pub(crate) fn count<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, Node::count)
}
