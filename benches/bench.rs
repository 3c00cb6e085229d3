use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bst::tree::{Duplicates, Order, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances, so this is a
/// right-leaning spine as tall as the tree is large.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
        tree.insert(x, Duplicates::Reject);
    }

    tree
}

/// Builds a tree by inserting values in a balanced manner, so it has `num_levels` levels of
/// nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid], Duplicates::Reject);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a read-only query on a BST.
/// It creates a group for the given name and closure and runs it against balanced and
/// unbalanced trees of various sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in &tree_tests {
            let id = BenchmarkId::new(*name, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, i| {
                b.iter(|| f(tree, black_box(*i as i32)))
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        black_box(tree.contains(&i));
    });
    bench_helper(c, "contains-miss", |tree, i| {
        black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "contains-unordered", |tree, i| {
        black_box(tree.contains_unordered(&i));
    });
    bench_helper(c, "count", |tree, i| {
        black_box(tree.count(&i));
    });
    bench_helper(c, "path", |tree, i| {
        black_box(tree.path(&i));
    });
    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.traverse(Order::InOrder));
    });

    let mut group = c.benchmark_group("insert-duplicates");
    for num_levels in [3, 7, 11] {
        let size = num_nodes_in_full_tree(num_levels);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut tree = Tree::new();
                for x in 0..size {
                    tree.insert(black_box(x % 16), Duplicates::Admit);
                }
                tree
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
