use ordered_tree::plain::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(tree.insert(v.clone()), set.insert(v.clone()));
            }
            Op::Remove(v) => {
                assert_eq!(tree.remove(v), set.remove(v));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let values: Vec<_> = tree.iter().collect();
        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn min_max_match_traversal(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let values: Vec<_> = tree.iter().collect();
        match (values.first(), values.last()) {
            (Some(&first), Some(&last)) => {
                tree.min() == Ok(first) && tree.max() == Ok(last)
            }
            _ => tree.min().is_err() && tree.max().is_err(),
        }
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_roundtrip(xs: Vec<i8>, extra: i8) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let before: Vec<_> = tree.iter().copied().collect();
        let was_present = tree.contains(&extra);

        tree.insert(extra);
        if !was_present {
            assert!(tree.remove(&extra));
        }

        tree.iter().copied().eq(before.iter().copied())
    }
}

quickcheck::quickcheck! {
    fn removing_absent_values_is_idempotent(xs: Vec<i8>, misses: Vec<i8>) -> bool {
        let added: BTreeSet<_> = xs.iter().copied().collect();

        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        misses.iter().filter(|x| !added.contains(x)).all(|x| {
            // Repeated misses answer the same way and leave the set alone.
            !tree.remove(x) && !tree.remove(x) && tree.len() == added.len()
        })
    }
}
