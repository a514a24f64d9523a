//! Sideways pretty printing. The right subtree is drawn above its parent and the left subtree
//! below, so the tree reads like it was rotated a quarter turn counterclockwise:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_subtree(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes one line per node under `node`, right subtree first. `is_left` says which side of
/// its parent `node` hangs from, which picks both its own branch marker and the guide lines
/// its children inherit.
fn write_subtree<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let guide = if is_left { "│   " } else { "    " };
        write_subtree(f, right, &format!("{}{}", prefix, guide), false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, branch, node.key())?;

    if let Some(left) = node.left() {
        let guide = if is_left { "    " } else { "│   " };
        write_subtree(f, left, &format!("{}{}", prefix, guide), true)?;
    }

    Ok(())
}
