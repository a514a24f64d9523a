//! A Binary Search Tree built for cheap lookups from the start. Construction sorts and
//! deduplicates its input and always picks the median as each subtree's root, so a freshly
//! built tree has the minimum possible height. Later inserts and deletes are plain BST
//! operations and do not rebalance; [`Tree::rebalance`] rebuilds the whole tree from scratch
//! when it has become lopsided.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 8, 1, 4, 7, 9, 3]).unwrap();
//! assert_eq!(tree.keys(), vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.height(), 3);
//!
//! tree.insert(10).unwrap();
//! tree.insert(11).unwrap();
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding restores the minimum height.
//! assert!(tree.rebalance());
//! assert!(tree.is_balanced());
//!
//! // Stored keys can't be inserted twice.
//! assert!(tree.insert(5).is_err());
//!
//! assert!(tree.delete(&5));
//! assert!(tree.find(&5).is_none());
//! ```

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::key::Key;
use crate::node::{self, Link, Node};

/// Message for reattachments that can't fail: removing keys from a subtree never moves a key
/// across its parent.
const PRUNED: &str = "a subtree keeps its ordering after a key is removed from it";

/// An ordered collection of distinct numeric keys.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, absent when the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        node::count(self.root())
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether every node's subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        is_balanced(self.root())
    }
}

impl<K: Key> Tree<K> {
    /// Builds a tree holding every distinct key of `keys`, as returned by [`build_tree`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] if any key is not a finite number.
    pub fn build<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        Ok(Self {
            root: build_tree(keys)?,
        })
    }

    /// Inserts `key` as a new leaf. Every node on the path down has its height and count
    /// refreshed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKey`] if `key` is not a finite number.
    /// - [`Error::RightNotGreater`] if `key` is already stored. Equal keys are routed right,
    ///   so that's the side whose ordering they would break.
    ///
    /// The tree is unchanged on failure.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: K) -> Result<()> {
        let new = Node::new(key)?;
        if let Some(existing) = self.find(&key) {
            trace!("key already stored");
            existing.check_right(&key)?;
        }

        let root = self.root.take();
        self.root = Some(insert(root, Box::new(new))?);
        Ok(())
    }

    /// Removes `key` from the tree, returning whether it was present. A node with two
    /// children takes over its in-order successor's key and the successor is removed instead.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, key: &K) -> bool {
        if !key.is_valid() {
            return false;
        }

        let before = self.len();
        self.root = delete(self.root.take(), key);
        let removed = self.len() < before;
        trace!(removed, "delete finished");
        removed
    }

    /// Finds the node holding `key`, if any.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        if !key.is_valid() {
            return None;
        }
        find(self.root(), key)
    }

    /// How many edges separate the root from the node holding `target`'s key. The root is at
    /// depth 0. `Ok(None)` means the key isn't in this tree, which can only happen for a node
    /// that came from somewhere else.
    ///
    /// # Errors
    ///
    /// [`Error::MissingTarget`] when `target` is `None`.
    pub fn depth(&self, target: Option<&Node<K>>) -> Result<Option<usize>> {
        let target = target.ok_or(Error::MissingTarget)?;
        Ok(depth(self.root(), target.key(), 0))
    }

    /// Every key in ascending order.
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        self.in_order(|node| keys.push(*node.key()));
        keys
    }

    /// Rebuilds the tree at minimum height if it isn't balanced. Returns whether anything was
    /// rebuilt.
    #[instrument(level = "debug", skip(self))]
    pub fn rebalance(&mut self) -> bool {
        if self.is_balanced() {
            return false;
        }

        let mut keys = Vec::with_capacity(self.len());
        self.level_order_iterative(|node| keys.push(*node.key()));
        debug!(len = keys.len(), height = self.height(), "rebuilding tree");

        self.root = build_tree(keys).expect("keys read out of a tree are finite");
        true
    }
}

/// Sorts and deduplicates `keys` and links them into a tree of minimum height, returning its
/// root. Each subtree is rooted at the median of its keys, the lower median when there is an
/// even number of them.
///
/// # Errors
///
/// [`Error::InvalidKey`] if any key is not a finite number. Keys are checked before anything
/// is built.
pub fn build_tree<K, I>(keys: I) -> Result<Link<K>>
where
    K: Key,
    I: IntoIterator<Item = K>,
{
    let mut keys: Vec<K> = keys.into_iter().collect();
    if let Some(invalid) = keys.iter().find(|key| !key.is_valid()) {
        return Err(Error::InvalidKey(invalid.to_string()));
    }

    keys.sort_by(K::compare);
    keys.dedup_by(|a, b| a.compare(b) == Ordering::Equal);
    debug!(len = keys.len(), "building tree");

    build_sorted(&keys)
}

/// Recursive helper for [`build_tree`] over strictly ascending keys.
fn build_sorted<K: Key>(keys: &[K]) -> Result<Link<K>> {
    if keys.is_empty() {
        return Ok(None);
    }

    let mid = (keys.len() - 1) / 2;
    let mut node = Node::new(keys[mid])?;
    node.set_left(build_sorted(&keys[..mid])?)?;
    node.set_right(build_sorted(&keys[mid + 1..])?)?;

    Ok(Some(Box::new(node)))
}

fn insert<K: Key>(link: Link<K>, new: Box<Node<K>>) -> Result<Box<Node<K>>> {
    let mut node = match link {
        Some(node) => node,
        None => return Ok(new),
    };

    if new.key().compare(node.key()) == Ordering::Less {
        let left = node.take_left();
        node.set_left(Some(insert(left, new)?))?;
    } else {
        let right = node.take_right();
        node.set_right(Some(insert(right, new)?))?;
    }

    Ok(node)
}

fn delete<K: Key>(link: Link<K>, key: &K) -> Link<K> {
    let mut node = link?;

    match key.compare(node.key()) {
        Ordering::Less => {
            let left = node.take_left();
            node.set_left(delete(left, key)).expect(PRUNED);
        }
        Ordering::Greater => {
            let right = node.take_right();
            node.set_right(delete(right, key)).expect(PRUNED);
        }
        Ordering::Equal => {
            let successor = match (node.left(), node.right()) {
                (None, _) => return node.take_right(),
                (_, None) => return node.take_left(),
                (Some(_), Some(right)) => *leftmost(right).key(),
            };

            node.replace_key(successor);
            let right = node.take_right();
            node.set_right(delete(right, &successor)).expect(PRUNED);
        }
    }

    Some(node)
}

/// The node holding the smallest key under `node`.
fn leftmost<K>(mut node: &Node<K>) -> &Node<K> {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

fn find<'a, K: Key>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>> {
    let node = node?;
    match key.compare(node.key()) {
        Ordering::Less => find(node.left(), key),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(node.right(), key),
    }
}

fn depth<K: Key>(node: Option<&Node<K>>, key: &K, so_far: usize) -> Option<usize> {
    let node = node?;
    match key.compare(node.key()) {
        Ordering::Less => depth(node.left(), key, so_far + 1),
        Ordering::Equal => Some(so_far),
        Ordering::Greater => depth(node.right(), key, so_far + 1),
    }
}

fn is_balanced<K>(node: Option<&Node<K>>) -> bool {
    node.map_or(true, |node| {
        node.balance_factor().abs() <= 1 && is_balanced(node.left()) && is_balanced(node.right())
    })
}
