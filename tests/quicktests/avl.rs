use ordered_tree::avl::Tree;

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

/// AVL worst-case height bound for `n` values.
fn height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2()
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
    fn height_bounded_under_inserts(xs: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        (tree.height() as f64) <= height_bound(tree.len())
    }
}

quickcheck::quickcheck! {
    fn height_bounded_under_mixed_operations(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        // Check after every operation, not just at the end. Note that debug
        // builds also assert the per-node balance inside the tree itself.
        for op in &ops {
            do_ops(std::slice::from_ref(op), &mut tree, &mut set);
            if (tree.height() as f64) > height_bound(tree.len()) {
                return false;
            }
        }
        true
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
