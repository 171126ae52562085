use bintree::{Error, Node, Tree};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Returns whether every node's left subtree is strictly smaller and right subtree is greater or
/// equal. Also counts the nodes so the count can be checked against `len`.
fn ordered(
    node: Option<&Node<i8>>,
    lower: Option<i8>,
    upper: Option<i8>,
    count: &mut usize,
) -> bool {
    let Some(node) = node else {
        return true;
    };
    *count += 1;
    let key = *node.key();
    lower.map_or(true, |lower| key >= lower)
        && upper.map_or(true, |upper| key < upper)
        && ordered(node.left(), lower, Some(key), count)
        && ordered(node.right(), Some(key), upper, count)
}

fn is_valid(tree: &Tree<i8>) -> bool {
    let mut count = 0;
    ordered(tree.root(), None, None, &mut count) && count == tree.len()
}

/// Applies a set of operations to a tree and a sorted vec.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same keys, duplicates included.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(k) => {
                let len = tree.len();
                if tree.insert(*k).key() != k {
                    return false;
                }
                let pos = model.partition_point(|x| x <= k);
                model.insert(pos, *k);
                if tree.len() != len + 1 {
                    return false;
                }
            }
            Op::Remove(k) => {
                let len = tree.len();
                let expected = model.iter().position(|x| x == k).map(|pos| model.remove(pos));
                match (tree.remove(k), expected) {
                    (Ok(removed), Some(_)) if removed == *k && tree.len() == len - 1 => {}
                    (Err(Error::KeyNotFound), None) if tree.len() == len => {}
                    _ => return false,
                }
            }
            Op::Iter => {
                if !tree.iter().eq(model.iter()) {
                    return false;
                }
            }
        }
        if !is_valid(tree) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.iter().eq(model.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.in_order().into_iter().eq(sorted.iter())
}

#[quickcheck]
fn minimum_is_first_in_order(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    tree.minimum().map(Node::key) == tree.iter().next()
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|&x| x != k).collect();
    let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();

    tree.insert(k);
    tree.remove(&k) == Ok(k) && tree.iter().copied().eq(before) && is_valid(&tree)
}

#[quickcheck]
fn removed_key_is_then_absent(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|&x| x != k).collect();
    tree.insert(k);

    tree.remove(&k) == Ok(k) && tree.remove(&k) == Err(Error::KeyNotFound) && !tree.contains(&k)
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let mut still_present = xs;
    for remove in &removes {
        let found = still_present.iter().position(|x| x == remove);
        match (tree.remove(remove), found) {
            (Ok(_), Some(pos)) => {
                still_present.swap_remove(pos);
            }
            (Err(Error::KeyNotFound), None) => {}
            _ => return false,
        }
    }

    still_present.sort_unstable();
    is_valid(&tree) && tree.iter().eq(still_present.iter())
}
