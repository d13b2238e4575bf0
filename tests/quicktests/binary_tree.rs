use exercises::binary_tree::{Arena, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and erases we have the same set of values in both.
fn do_ops(ops: &[Op<i8>], arena: &mut Arena<i8>, tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(value) => {
                let node = arena.alloc(*value);
                let inserted = tree.insert(arena, node).is_ok();
                assert_eq!(inserted, set.insert(*value));
            }
            Op::Erase(value) => {
                let erased = tree.erase(arena, value).is_some();
                assert_eq!(erased, set.remove(value));
            }
            Op::Check => {
                assert!(tree.iter(arena).eq(set.iter()));
                assert!(tree.iter(arena).rev().eq(set.iter().rev()));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut arena = Arena::new();
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut arena, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter(&arena).eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut arena = Arena::new();
        let mut tree = Tree::new();
        for x in &xs {
            let node = arena.alloc(*x);
            let _ = tree.insert(&mut arena, node);
        }

        xs.iter().all(|x| tree.find(&arena, x).get() == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut arena = Arena::new();
        let mut tree = Tree::new();
        for x in &xs {
            let node = arena.alloc(*x);
            let _ = tree.insert(&mut arena, node);
        }
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(&arena, x).get().is_none())
    }
}

quickcheck::quickcheck! {
    fn every_erase_preserves_order(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut arena = Arena::new();
        let mut tree = Tree::new();
        for x in &xs {
            let node = arena.alloc(*x);
            let _ = tree.insert(&mut arena, node);
        }

        for delete in &deletes {
            let _ = tree.erase(&mut arena, delete);
            let forward: Vec<i8> = tree.iter(&arena).copied().collect();
            if !forward.windows(2).all(|pair| pair[0] < pair[1]) {
                return false;
            }
            if tree.find(&arena, delete).get().is_some() {
                return false;
            }
        }

        let remaining: BTreeSet<i8> = xs
            .iter()
            .copied()
            .filter(|x| !deletes.contains(x))
            .collect();
        tree.iter(&arena).eq(remaining.iter())
    }
}

quickcheck::quickcheck! {
    fn erase_smallest_drains_in_order(xs: Vec<i8>) -> bool {
        let mut arena = Arena::new();
        let mut tree = Tree::new();
        for x in &xs {
            let node = arena.alloc(*x);
            let _ = tree.insert(&mut arena, node);
        }

        let expected: Vec<i8> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let mut drained = Vec::with_capacity(expected.len());
        while !tree.is_empty() {
            let smallest = *tree.first(&arena).get().unwrap();
            drained.push(smallest);
            tree.first_mut(&mut arena).remove();
        }

        drained == expected && tree.len() == 0
    }
}
