use bst::{Error, Node, Tree};

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both, and that the tree
/// rejected exactly the inserts the set already held.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                let inserted = tree.insert(k);
                let expected = set.insert(k);
                match inserted {
                    Ok(()) if expected => {}
                    Err(Error::RightNotGreater { .. }) if !expected => {}
                    _ => return false,
                }
            }
            Op::Remove(k) => {
                if tree.delete(&k) != set.remove(&k) {
                    return false;
                }
            }
            Op::Rebalance => {
                tree.rebalance();
                if !tree.is_balanced() {
                    return false;
                }
            }
        }
    }

    true
}

/// Recomputes height and count of every node and checks them against the cached values,
/// along with the ordering of every key within `(low, high)`. Returns the subtree's height.
fn check_subtree(node: Option<&Node<i8>>, low: Option<i8>, high: Option<i8>) -> Option<usize> {
    let node = match node {
        Some(node) => node,
        None => return Some(0),
    };
    let key = *node.key();
    if low.map_or(false, |low| key <= low) || high.map_or(false, |high| key >= high) {
        return None;
    }

    let left = check_subtree(node.left(), low, Some(key))?;
    let right = check_subtree(node.right(), Some(key), high)?;
    let count = 1
        + node.left().map_or(0, Node::count)
        + node.right().map_or(0, Node::count);
    let height = left.max(right) + 1;

    let consistent = node.height() == height
        && node.count() == count
        && node.balance_factor() == left as isize - right as isize;
    if consistent {
        Some(height)
    } else {
        None
    }
}

/// Smallest possible height for `n` nodes, `ceil(lg (n + 1))`.
fn min_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn build_is_sorted_and_minimal(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied()).unwrap();
    let expected: Vec<i8> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    tree.keys() == expected
        && tree.height() == min_height(expected.len())
        && tree.len() == expected.len()
        && tree.is_balanced()
        && check_subtree(tree.root(), None, None).is_some()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::build(xs.iter().copied()).unwrap();
    let mut set: BTreeSet<i8> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set)
        && tree.keys() == set.iter().copied().collect::<Vec<_>>()
        && tree.len() == set.len()
        && check_subtree(tree.root(), None, None).is_some()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        // Repeats are rejected.
        let _ = tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::key) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied()).unwrap();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied()).unwrap();
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && check_subtree(tree.root(), None, None).is_some()
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x);
    }
    let keys = tree.keys();

    tree.rebalance();
    let first = tree.is_balanced() && tree.keys() == keys;
    let rebuilt_again = tree.rebalance();

    first && !rebuilt_again && tree.is_balanced() && tree.keys() == keys
}

#[quickcheck]
fn depth_of_every_node(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied()).unwrap();
    let mut depths = Vec::new();
    tree.level_order_iterative(|node| depths.push(tree.depth(Some(node)).ok().flatten()));

    // Level order never moves back up the tree.
    depths.windows(2).all(|w| w[0] <= w[1])
        && depths
            .iter()
            .all(|d| matches!(d, Some(d) if *d < tree.height()))
}

#[quickcheck]
fn level_orders_agree(xs: Vec<i8>, extra: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs).unwrap();
    for x in extra {
        let _ = tree.insert(x);
    }

    let mut iterative = Vec::new();
    tree.level_order_iterative(|node| iterative.push(*node.key()));
    let mut recursive = Vec::new();
    tree.level_order_recursive(|node| recursive.push(*node.key()));

    iterative == recursive && iterative.len() == tree.len()
}
