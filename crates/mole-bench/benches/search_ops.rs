//! Criterion benchmarks for the full resistance search.

use criterion::{criterion_group, criterion_main, Criterion};
use mole_bench::{corner_sources, reference_profile, stress_profile};
use mole_core::CellId;
use mole_search::{IndexedHeap, LazyMole};
use std::hint::black_box;

/// Benchmark: Single-source search over the 10K-cell reference profile.
fn bench_search_reference(c: &mut Criterion) {
    let p = reference_profile(42);

    c.bench_function("search_reference_10k", |b| {
        b.iter(|| {
            let mut mole = LazyMole::new(&p.grid, &p.field, &[CellId(0)]).unwrap();
            black_box(mole.run().unwrap().resistance(CellId(9_999)).unwrap());
        });
    });
}

/// Benchmark: Multi-source search plus one path over the 100K-cell 3D profile.
fn bench_search_stress(c: &mut Criterion) {
    let p = stress_profile(42);
    let sources = corner_sources(&p.grid, 50);
    let target = p.grid.merge_ids(49, 25, 20);

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("search_stress_100k", |b| {
        b.iter(|| {
            let mut mole = LazyMole::new(&p.grid, &p.field, &sources).unwrap();
            let result = mole.run().unwrap();
            black_box(result.path(target).unwrap().len());
        });
    });
    group.finish();
}

/// Benchmark: 10K pushes, 10K decrease-keys, then drain.
fn bench_heap_churn(c: &mut Criterion) {
    let n = 10_000;
    c.bench_function("indexed_heap_churn_10k", |b| {
        b.iter(|| {
            let mut heap = IndexedHeap::new(n);
            for i in 0..n {
                let p = ((i as u64).wrapping_mul(6364136223846793007) % 1_000_000) as f64;
                heap.push(CellId(i), p);
            }
            for i in 0..n {
                let p = heap.priority(CellId(i)).unwrap_or(0.0);
                heap.decrease_key(CellId(i), p * 0.5);
            }
            while let Some(e) = heap.pop() {
                black_box(e);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_search_reference,
    bench_search_stress,
    bench_heap_churn
);
criterion_main!(benches);
