use binary_tree::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Builds a tree from `xs`, skipping values that are already present.
fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        match tree.insert(*x) {
            Ok(()) | Err(Error::DuplicateValue) => {}
            Err(e) => panic!("unexpected insert error: {}", e),
        }
    }

    tree
}

/// Inserts the middle of `xs` first, then recurses into both halves, so
/// that the tree ends up as balanced as `xs.len()` allows.
fn fill_balanced_tree(tree: &mut Tree<u16>, xs: &[u16]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]).unwrap();
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.iter().eq(expected.into_iter())
}

#[quickcheck]
fn reverse_in_order_is_descending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut values = Vec::new();
    tree.visit_in_order_reverse(|node| values.push(*node.value()));

    values.windows(2).all(|pair| pair[0] > pair[1]) && values.len() == tree.len()
}

#[quickcheck]
fn every_walk_visits_each_node_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut walks = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    tree.visit_in_order(|node| walks[0].push(*node.value()));
    tree.visit_in_order_reverse(|node| walks[1].push(*node.value()));
    tree.visit_pre_order(|node| walks[2].push(*node.value()));
    tree.visit_post_order(|node| walks[3].push(*node.value()));

    walks.iter_mut().all(|walk| {
        walk.sort_unstable();
        walk.iter().eq(tree.iter())
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.get(x).is_none())
}

#[quickcheck]
fn count_is_inserts_minus_deletes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut inserted = 0;
    for x in &xs {
        if tree.insert(*x).is_ok() {
            inserted += 1;
        }
    }

    let mut deleted = 0;
    for delete in &deletes {
        match tree.delete(delete) {
            Ok(value) if value == *delete => deleted += 1,
            Ok(_) => return false,
            Err(Error::NodeNotFound) => {}
            Err(_) => return false,
        }
    }

    tree.len() == inserted - deleted && tree.iter().count() == tree.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let deletes: HashSet<_> = deletes.into_iter().collect();
    let still_present: BTreeSet<_> = xs.into_iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| !tree.contains(x)) && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn delete_keeps_remaining_order(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree = tree_of(&xs);
    let target = xs[pick % xs.len()];
    let expected: Vec<_> = tree.iter().copied().filter(|x| *x != target).collect();

    if tree.delete(&target) != Ok(target) {
        return TestResult::failed();
    }
    let remaining: Vec<_> = tree.iter().copied().collect();

    TestResult::from_bool(remaining == expected && tree.get(&target).is_none())
}

#[quickcheck]
fn insert_then_delete_restores_shape(xs: Vec<i8>, extra: i8) -> TestResult {
    // Shapes are compared through `to_array`, which doubles with every level.
    let xs: Vec<_> = xs.into_iter().take(12).collect();
    let mut tree = tree_of(&xs);
    if tree.contains(&extra) {
        return TestResult::discard();
    }
    let before: Vec<_> = tree.to_array().into_iter().map(|v| v.copied()).collect();

    if tree.insert(extra).is_err() || tree.delete(&extra) != Ok(extra) {
        return TestResult::failed();
    }
    let after: Vec<_> = tree.to_array().into_iter().map(|v| v.copied()).collect();

    TestResult::from_bool(after == before)
}

#[quickcheck]
fn path_descends_to_value(xs: Vec<i8>, pick: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree = tree_of(&xs);
    let target = xs[pick % xs.len()];
    let path = match tree.path_to(&target) {
        Ok(path) => path,
        Err(_) => return TestResult::failed(),
    };

    let starts_at_root = tree.root().map(|root| root.value()) == path.first().copied();
    let ends_at_target = path.last() == Some(&&target);
    // Each step goes left when the target is smaller and right when it is larger.
    let descends = path.windows(2).all(|pair| {
        let (from, to) = (*pair[0], *pair[1]);
        if target < from {
            to < from
        } else {
            to > from
        }
    });

    TestResult::from_bool(starts_at_root && ends_at_target && descends)
}

#[quickcheck]
fn path_to_missing_value_fails(xs: Vec<i8>, missing: i8) -> TestResult {
    if xs.contains(&missing) {
        return TestResult::discard();
    }
    let tree = tree_of(&xs);

    TestResult::from_bool(tree.path_to(&missing) == Err(Error::NodeNotFound))
}

#[quickcheck]
fn array_uses_complete_tree_layout(xs: Vec<i8>) -> bool {
    // The array doubles with every level, so keep trees small.
    let xs: Vec<_> = xs.into_iter().take(12).collect();
    let tree = tree_of(&xs);
    let array = tree.to_array();

    if tree.is_empty() {
        return array.is_empty();
    }
    if array.len() != 2usize.pow(tree.height() as u32 + 1) - 1 {
        return false;
    }
    if array.iter().flatten().count() != tree.len() {
        return false;
    }

    // Walk the tree alongside the array indices.
    let mut stack = vec![(tree.root(), 0)];
    while let Some((node, index)) = stack.pop() {
        let Some(node) = node else {
            continue;
        };
        if array[index] != Some(node.value()) {
            return false;
        }
        stack.push((node.left(), 2 * index + 1));
        stack.push((node.right(), 2 * index + 2));
    }

    true
}

#[quickcheck]
fn sorted_input_height_is_len_minus_one(n: u8) -> TestResult {
    if n == 0 {
        return TestResult::discard();
    }
    let mut tree = Tree::new();
    for x in 0..n {
        tree.insert(x).unwrap();
    }

    TestResult::from_bool(tree.height() == n as usize - 1)
}

#[test]
fn balanced_input_height_is_logarithmic() {
    for n in 1..=1024u16 {
        let xs: Vec<_> = (0..n).collect();
        let mut tree = Tree::new();
        fill_balanced_tree(&mut tree, &xs);

        // ceil(log2(n + 1)) - 1
        let expected = (usize::BITS - (n as usize).leading_zeros()) as usize - 1;
        assert_eq!(tree.height(), expected, "n = {}", n);
        assert_eq!(tree.len(), n as usize);
    }
}

#[test]
fn scenario_delete_two_children() {
    let mut tree = Tree::new();
    for value in [50, 70, 20, 60, 10, 30, 15] {
        tree.insert(value).unwrap();
    }

    assert_eq!(tree.delete(&20), Ok(20));

    let left = tree.root().and_then(|root| root.left()).unwrap();
    assert_eq!(left.value(), &15);
    assert_eq!(left.left().map(|n| *n.value()), Some(10));
    assert_eq!(left.right().map(|n| *n.value()), Some(30));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 15, 30, 50, 60, 70]);
}

#[test]
fn empty_tree() {
    let mut tree = Tree::<i32>::new();

    assert_eq!(tree.height(), 0);
    assert_eq!(tree.len(), 0);
    assert!(tree.to_array().is_empty());
    assert!(tree.get(&1).is_none());
    assert_eq!(tree.delete(&1), Err(Error::NodeNotFound));
}
