use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ordered_tree::sequence;
use ordered_tree::tree::OrderedTree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Key orders to compare. Ascending keys build a chain, median-first keys build a full tree and
/// shuffled keys land somewhere in between.
fn key_orders(num_levels: usize) -> [(&'static str, Vec<u32>); 3] {
    let size = num_nodes_in_full_tree(num_levels);
    let mut rng = StdRng::seed_from_u64(num_levels as u64);
    [
        ("ascending", sequence::ascending(size)),
        ("random", sequence::shuffled(size, &mut rng)),
        ("median-first", sequence::median_first(size)),
    ]
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. The closure gets the built tree and the keys in
/// the order they were inserted.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&OrderedTree<u32>, &[u32])) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11].iter().copied() {
        for (order, keys) in key_orders(num_levels).iter() {
            let tree: OrderedTree<u32> = keys.iter().copied().collect();
            let id = BenchmarkId::new(*order, keys.len());

            group.bench_with_input(id, keys, |b, keys| b.iter(|| f(&tree, keys)));
        }
    }

    group.finish();
}

/// Like [`bench_helper`] but for operations that mutate the tree. A fresh tree is built for
/// every iteration outside of the timed section.
fn bench_mut_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree<u32>, u32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11].iter().copied() {
        for (order, keys) in key_orders(num_levels).iter() {
            let tree: OrderedTree<u32> = keys.iter().copied().collect();
            let largest_element_in_tree = keys.len() as u32;
            let id = BenchmarkId::new(*order, keys.len());

            group.bench_function(id, |b| {
                b.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        f(&mut tree, black_box(largest_element_in_tree));
                        tree
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "build", |_, keys| {
        let tree: OrderedTree<u32> = keys.iter().copied().collect();
        black_box(tree);
    });
    bench_helper(c, "search-all", |tree, keys| {
        for key in keys {
            let _node = black_box(tree.search(key));
        }
    });
    bench_helper(c, "search-all-recursive", |tree, keys| {
        for key in keys {
            let _node = black_box(tree.search_recursive(key));
        }
    });
    bench_helper(c, "search-miss", |tree, keys| {
        let _node = black_box(tree.search(&(keys.len() as u32 + 1)));
    });
    bench_helper(c, "height", |tree, _| {
        let _height = black_box(tree.height());
    });

    bench_mut_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_mut_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_mut_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
