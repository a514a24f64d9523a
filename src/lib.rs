//! This crate exposes a Binary Search Tree over numeric keys that is built balanced, stays
//! queryable through inserts and deletes, and can be rebuilt when it drifts out of balance.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). [`Tree::build`] keeps the height at
//! `ceil(lg (N + 1))` by always rooting a subtree at the median of its keys. Inserts and
//! deletes don't rotate anything, so a tree fed ascending keys degrades into a list until
//! [`Tree::rebalance`] rebuilds it.
//!
//! Each [`Node`] enforces the ordering against its direct children whenever a child is
//! attached and caches the height and size of its subtree. [`Tree`] only ever restructures
//! nodes through that interface.
//!
//! # Examples
//!
//! ```
//! use bst::{Error, Tree};
//!
//! let mut tree = Tree::build(vec![3, 1, 2]).unwrap();
//! tree.insert(4).unwrap();
//!
//! let mut visited = Vec::new();
//! tree.pre_order(|node| visited.push(*node.key()));
//! assert_eq!(visited, vec![2, 1, 3, 4]);
//!
//! let four = tree.find(&4);
//! assert_eq!(tree.depth(four), Ok(Some(2)));
//! assert_eq!(tree.depth(None), Err(Error::MissingTarget));
//!
//! println!("{}", tree);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

mod display;
mod error;
mod key;
mod node;
pub mod traverse;
mod tree;

pub use error::{Error, Result};
pub use key::Key;
pub use node::{Link, Node};
pub use tree::{build_tree, Tree};
