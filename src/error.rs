//! Errors raised when a tree or node invariant would be violated.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way an operation on a [`Node`][crate::Node] or [`Tree`][crate::Tree] can be rejected.
/// Keys are carried in their `Display` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key is not a storable number (e.g. `NaN` or an infinity).
    #[error("key {0} is not a finite number")]
    InvalidKey(String),

    /// A node was built with a left child whose key exceeds its right child's key.
    #[error("left child {left} must not exceed right child {right}")]
    UnorderedChildren {
        /// Key of the offered left child.
        left: String,
        /// Key of the offered right child.
        right: String,
    },

    /// A left child must hold a key strictly less than its parent's.
    #[error("left child {child} must be less than parent {parent}")]
    LeftNotLess {
        /// Key of the rejected child.
        child: String,
        /// Key of the parent it was offered to.
        parent: String,
    },

    /// A right child must hold a key strictly greater than its parent's.
    #[error("right child {child} must be greater than parent {parent}")]
    RightNotGreater {
        /// Key of the rejected child.
        child: String,
        /// Key of the parent it was offered to.
        parent: String,
    },

    /// `depth` was asked about no node at all.
    #[error("a target node is required")]
    MissingTarget,
}
