#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use sparse_merkle_set_hash::{IncrementalSetTree, SparseMerkleSetHash};

/// Evenly spread positions across a depth-32 universe.
fn sample_leaves(count: u64) -> Vec<u64> {
    let stride = (1u64 << 32) / count;
    (0..count).map(|i| i * stride).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("batch root");
        for &size in [100u64, 1_000, 10_000].iter() {
            group.bench_with_input(BenchmarkId::new("leaves", size), &size, |b, &size| {
                let mut hasher = SparseMerkleSetHash::new(32).expect("depth 32");
                b.iter(|| {
                    let mut leaves = sample_leaves(size);
                    hasher.compute(&mut leaves).expect("valid leaves")
                });
            });
        }
    }

    c.bench_function("incremental insert 1000", |b| {
        let leaves = sample_leaves(1_000);
        b.iter(|| {
            let mut tree = IncrementalSetTree::new(32).expect("depth 32");
            for &leaf in &leaves {
                tree.insert(leaf).expect("insert");
            }
            tree.root()
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
