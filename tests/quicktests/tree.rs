use bst::tree::{Duplicates, Order, Tree};

use std::collections::HashSet;

fn build(xs: &[i8], duplicates: Duplicates) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, duplicates);
    }
    tree
}

quickcheck::quickcheck! {
    fn inorder_without_duplicates_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree = build(&xs, Duplicates::Reject);

        let mut expected: Vec<i8> = xs.iter().copied().collect::<HashSet<_>>().into_iter().collect();
        expected.sort_unstable();
        tree.traverse(Order::InOrder).into_iter().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn inorder_with_duplicates_keeps_the_multiset(xs: Vec<i8>) -> bool {
        let tree = build(&xs, Duplicates::Admit);

        let mut expected = xs.clone();
        expected.sort_unstable();
        tree.len() == xs.len() && tree.traverse(Order::InOrder).into_iter().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>, admit: bool) -> bool {
        let tree = build(&xs, admit.into());

        xs.iter().all(|x| tree.contains(x) && tree.contains_unordered(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>, admit: bool) -> bool {
        let tree = build(&xs, admit.into());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && !tree.contains_unordered(x))
    }
}

quickcheck::quickcheck! {
    fn count_matches_insertions(xs: Vec<i8>, target: i8) -> bool {
        let tree = build(&xs, Duplicates::Admit);

        let inserted = xs.iter().filter(|x| **x == target).count();
        let occurrences = tree.count(&target);
        occurrences.count == inserted && occurrences.depths.is_some() == (inserted > 0)
    }
}

quickcheck::quickcheck! {
    fn path_found_iff_counted(xs: Vec<i8>, target: i8, admit: bool) -> bool {
        let tree = build(&xs, admit.into());

        match tree.path(&target) {
            Some(path) => {
                tree.count(&target).count > 0
                    && path.values.first().copied() == tree.root()
                    && path.values.last() == Some(&&target)
                    && path.values.len() == path.depths.min + 1
            }
            None => tree.count(&target).count == 0,
        }
    }
}

quickcheck::quickcheck! {
    fn preorder_starts_at_the_root(xs: Vec<i8>) -> bool {
        let tree = build(&xs, Duplicates::Admit);

        tree.traverse(Order::PreOrder).first().copied() == tree.root()
    }
}

#[test]
fn ascending_scenario() {
    let tree = build(&[1, 2, 3, 4, 5, 6, 7], Duplicates::Reject);

    assert_eq!(tree.traverse(Order::InOrder), vec![&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.root(), Some(&1));
}

#[test]
fn duplicate_scenario() {
    let tree = build(&[5, 3, 8, 3, 3], Duplicates::Admit);

    assert_eq!(tree.traverse(Order::InOrder), vec![&3, &3, &3, &5, &8]);
    assert_eq!(tree.count(&3).count, 3);
}

#[test]
fn empty_scenario() {
    let tree: Tree<i8> = Tree::new();

    assert!(!tree.contains(&42));
    assert_eq!(tree.count(&42).count, 0);
    assert!(tree.path(&42).is_none());
    assert_eq!(tree.height(), None);
}

#[test]
fn single_node_height() {
    let tree = build(&[9], Duplicates::Reject);

    assert_eq!(tree.height(), Some(0));
}
