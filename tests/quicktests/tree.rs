use ordered_tree::sequence;
use ordered_tree::tree::{Node, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut OrderedTree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

/// Keys in pre-order, which pins down the tree's shape.
fn shape<K: Copy>(tree: &OrderedTree<K>) -> Vec<K> {
    tree.pre_order().map(|n| *n.key()).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.is_valid_bst()
        && tree.len() == set.len()
        && set.iter().all(|key| tree.contains(key))
        && tree.iter().all(|key| set.contains(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| {
        tree.search(x).map(Node::key) == Some(x) && tree.search_recursive(x).map(Node::key) == Some(x)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none() && tree.search_recursive(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.is_valid_bst()
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_keeps_shape(xs: Vec<i16>, again: i16) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.insert(again);
    let before = (shape(&tree), tree.len(), tree.height());

    let inserted = tree.insert(again);

    !inserted && (shape(&tree), tree.len(), tree.height()) == before
}

#[quickcheck]
fn delete_missing_keeps_shape(xs: Vec<i16>, missing: i16) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before = shape(&tree);

    !tree.delete(&missing) && shape(&tree) == before
}

#[quickcheck]
fn delete_then_reinsert(xs: Vec<i16>, k: i16) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.insert(k);

    tree.delete(&k);
    let gone = !tree.contains(&k);
    tree.insert(k);

    gone && tree.contains(&k) && tree.is_valid_bst()
}

#[quickcheck]
fn ascending_height_is_len(n: u8) -> bool {
    let tree: OrderedTree<_> = sequence::ascending(n as usize).into_iter().collect();

    tree.height() == n as usize
}

#[quickcheck]
fn median_first_height_is_minimal(n: u16) -> bool {
    let n = n as usize % 4096;
    let tree: OrderedTree<_> = sequence::median_first(n).into_iter().collect();

    // ceil(log2(n + 1)) is the number of bits needed to write n.
    let minimal = (usize::BITS - n.leading_zeros()) as usize;
    tree.height() == minimal
}

#[test]
fn balanced_scenario() {
    let mut tree: OrderedTree<_> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();

    assert_eq!(tree.search(&40).map(Node::key), Some(&40));
    assert!(tree.search(&100).is_none());
    assert_eq!(tree.height(), 3);
    assert!(tree.is_valid_bst());

    assert!(tree.delete(&50));
    assert_eq!(tree.root().map(Node::key), Some(&60));
    assert!(tree.search(&50).is_none());
    assert!(tree.search(&60).is_some());
    assert!(tree.is_valid_bst());
}

#[test]
fn degenerate_scenario() {
    let tree: OrderedTree<_> = (1..=6).collect();

    assert_eq!(tree.height(), 6);
    assert!(tree.is_valid_bst());
}
