use rbt::Tree;

use std::collections::HashSet;

use quickcheck::{Gen, QuickCheck, TestResult};

use crate::Op;

/// Applies a set of operations to a tree, cloning it whenever asked to.
/// Every clone that gets left behind is checked to still look exactly
/// like it did when it was made.
fn do_ops(ops: &[Op<i32>]) -> bool {
    let mut bst = Tree::new();
    let mut snapshots = Vec::new();

    for op in ops {
        match op {
            Op::Insert(k) => bst.insert(*k),
            Op::Clone => {
                let copy = bst.clone();
                if copy.to_prefix_string() != bst.to_prefix_string() {
                    return false;
                }
                snapshots.push((bst.to_infix_string(), bst.to_postfix_string(), bst));
                bst = copy;
            }
        }
        if bst.validate().is_err() {
            return false;
        }
    }

    snapshots.iter().all(|(infix, postfix, tree)| {
        &tree.to_infix_string() == infix && &tree.to_postfix_string() == postfix
    })
}

#[quickcheck]
fn fuzz_inserts_and_clones(ops: Vec<Op<i32>>) -> bool {
    do_ops(&ops)
}

#[quickcheck]
fn stays_valid_after_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    xs.iter().all(|x| {
        tree.insert(i32::from(*x));
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(i32::from(*x)))
}

#[quickcheck]
fn infix_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let keys: Vec<i32> = tree
        .to_infix_string()
        .split_whitespace()
        .map(|token| token[1..].parse().unwrap())
        .collect();

    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn count_matches_tokens(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();

    tree.len() == xs.len()
        && tree.to_infix_string().split_whitespace().count() == xs.len()
        && tree.to_prefix_string().split_whitespace().count() == xs.len()
        && tree.to_postfix_string().split_whitespace().count() == xs.len()
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i32>, more: Vec<i32>) -> TestResult {
    if more.is_empty() {
        return TestResult::discard();
    }
    let original: Tree = xs.iter().copied().collect();
    let before = original.to_prefix_string();

    let mut copy = original.clone();
    if copy.to_infix_string() != original.to_infix_string()
        || copy.to_postfix_string() != original.to_postfix_string()
    {
        return TestResult::failed();
    }
    copy.extend(more.iter().copied());

    TestResult::from_bool(
        original.to_prefix_string() == before
            && original.len() == xs.len()
            && copy.len() == xs.len() + more.len(),
    )
}

/// Checks the invariants of much bigger trees than quickcheck builds by default.
#[test]
fn large_trees_stay_valid() {
    fn prop(xs: Vec<i32>) -> bool {
        let tree: Tree = xs.iter().copied().collect();
        tree.validate().is_ok() && tree.len() == xs.len()
    }

    QuickCheck::new()
        .gen(Gen::new(10_000))
        .tests(20)
        .quickcheck(prop as fn(Vec<i32>) -> bool);
}

#[test]
fn ascending_keys_stay_shallow() {
    let mut tree = Tree::new();
    for key in 0..10_000 {
        tree.insert(key);
        if key % 500 == 0 {
            assert_eq!(tree.validate(), Ok(()));
        }
    }

    assert_eq!(tree.len(), 10_000);
    // 2 * lg(10_001) is a little under 27.
    assert!(tree.height() <= 26);
    assert!(tree.iter().eq(0..10_000));
}
