//! Visiting every node of a subtree. Each order exists as a free function over a possibly
//! absent subtree and as a method on [`Tree`] that starts from the root. Visitors receive each
//! node exactly once.

use std::collections::VecDeque;

use crate::node::{self, Node};
use crate::tree::Tree;

/// Left subtree, then the node, then the right subtree. Keys come out ascending.
pub fn in_order<K, F>(node: Option<&Node<K>>, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(node);
        in_order(node.right(), visit);
    }
}

/// The node, then its left subtree, then its right subtree.
pub fn pre_order<K, F>(node: Option<&Node<K>>, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    if let Some(node) = node {
        visit(node);
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

/// Left subtree, then right subtree, then the node itself.
pub fn post_order<K, F>(node: Option<&Node<K>>, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(node);
    }
}

/// Breadth first, left to right within a level, using a FIFO queue.
pub fn level_order_iterative<K, F>(node: Option<&Node<K>>, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    let mut queue: VecDeque<&Node<K>> = node.into_iter().collect();

    while let Some(current) = queue.pop_front() {
        visit(current);
        queue.extend(current.left());
        queue.extend(current.right());
    }
}

/// Breadth first, left to right within a level, by descending once per level and visiting
/// only the nodes at that depth. Costs `O(n * height)` instead of `O(n)`.
pub fn level_order_recursive<K, F>(node: Option<&Node<K>>, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    for level in 1..=node::height(node) {
        visit_level(node, level, visit);
    }
}

/// Visits the nodes `level - 1` edges below `node`.
fn visit_level<K, F>(node: Option<&Node<K>>, level: usize, visit: &mut F)
where
    F: FnMut(&Node<K>),
{
    if let Some(node) = node {
        if level == 1 {
            visit(node);
        } else {
            visit_level(node.left(), level - 1, visit);
            visit_level(node.right(), level - 1, visit);
        }
    }
}

impl<K> Tree<K> {
    /// Visits every node in ascending key order.
    pub fn in_order<F: FnMut(&Node<K>)>(&self, mut visit: F) {
        in_order(self.root(), &mut visit);
    }

    /// Visits every node before its children.
    pub fn pre_order<F: FnMut(&Node<K>)>(&self, mut visit: F) {
        pre_order(self.root(), &mut visit);
    }

    /// Visits every node after its children.
    pub fn post_order<F: FnMut(&Node<K>)>(&self, mut visit: F) {
        post_order(self.root(), &mut visit);
    }

    /// Visits every node level by level with a queue. Does nothing on an empty tree.
    pub fn level_order_iterative<F: FnMut(&Node<K>)>(&self, mut visit: F) {
        level_order_iterative(self.root(), &mut visit);
    }

    /// Visits every node level by level, one descent per level. Does nothing on an empty tree.
    pub fn level_order_recursive<F: FnMut(&Node<K>)>(&self, mut visit: F) {
        level_order_recursive(self.root(), &mut visit);
    }
}
