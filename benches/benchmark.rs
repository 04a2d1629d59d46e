use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trampwick::model::{Link, Node, Tree};
use trampwick::traversal::{Strategy, traverse};

const BALANCED_DEPTHS: &[u32] = &[10, 14];
const CHAIN_LENGTHS: &[u32] = &[1_000, 50_000];

/// Complete tree of the given depth with values in inorder.
fn balanced(depth: u32) -> Tree<u32> {
    fn build(lo: u32, hi: u32) -> Link<u32> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo) / 2;
        Some(Node::boxed(mid, build(lo, mid), build(mid + 1, hi)))
    }
    Tree::from_link(build(0, (1 << depth) - 1))
}

fn strategies_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("balanced");
    for &depth in BALANCED_DEPTHS {
        let tree = balanced(depth);
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), depth), &tree, |b, tree| {
                b.iter(|| traverse(black_box(strategy), tree));
            });
        }
    }
    group.finish();
}

fn strategies_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("left_chain");
    for &length in CHAIN_LENGTHS {
        let tree = Tree::left_chain(0..length);
        // Recursive walks would overflow on long chains
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_stack_safe()) {
            group.bench_with_input(BenchmarkId::new(strategy.name(), length), &tree, |b, tree| {
                b.iter(|| traverse(black_box(strategy), tree));
            });
        }
    }
    group.finish();
}

fn lazy_first_values(c: &mut Criterion) {
    let tree = balanced(16);
    c.bench_function("trampoline_first_100", |b| {
        b.iter(|| tree.inorder().take(100).sum::<u32>());
    });
}

criterion_group!(regression, strategies_balanced, lazy_first_values);
criterion_group! {
    name = deep;
    config = Criterion::default().sample_size(10);
    targets = strategies_chain
}
criterion_main!(regression, deep);
