//! Benchmarks for move-class exploration.
//!
//! Measures:
//! - Loader throughput over the orientations of a path
//! - Checker cost for a quiver one leaf flip away from a representative
//! - Fingerprinting and equivalence of relabelled quivers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qvmove::prelude::*;

/// Linearly oriented path `0 -> 1 -> ... -> n-1`.
fn path(n: usize) -> QuiverMatrix {
    let mut q = QuiverMatrix::zero(n);
    for i in 1..n {
        q.set(i - 1, i, 1);
    }
    q
}

/// Exhausts the move class of paths of increasing length under the built-in moves.
fn bench_loader_paths(c: &mut Criterion) {
    let catalogue = Catalogue::standard();
    let finite = MutationFiniteCheck::new();
    let mut group = c.benchmark_group("loader_path");
    for n in [4usize, 6, 8] {
        let seed = path(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &seed, |b, seed| {
            b.iter(|| {
                let loader = MoveClassLoader::new(black_box(seed.clone()), catalogue.moves(), &finite);
                loader.count()
            });
        });
    }
    group.finish();
}

/// Classifies a quiver that reaches the built-in representative with one leaf flip.
fn bench_checker_standard(c: &mut Criterion) {
    let checker = Checker::builder().build();
    let seed: QuiverMatrix = "{ { 0 -1 0 0 } { 1 0 1 1 } { 0 -1 0 1 } { 0 -1 -1 0 } }"
        .parse()
        .unwrap();
    c.bench_function("checker_standard_seed", |b| {
        b.iter(|| checker.classify(black_box(&seed)));
    });
}

/// Compares a path with a reversed relabelling of itself.
fn bench_equivalence(c: &mut Criterion) {
    let a = path(12);
    let perm: Vec<usize> = (0..12).rev().collect();
    let b = a.permuted(&perm);
    c.bench_function("equivalence_path_12", |ben| {
        ben.iter(|| {
            let x = EquivQuiverMatrix::new(black_box(a.clone()));
            let y = EquivQuiverMatrix::new(black_box(b.clone()));
            assert!(x == y);
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10); // smaller sample for speed
    targets = bench_loader_paths,
              bench_checker_standard,
              bench_equivalence
);
criterion_main!(benches);
