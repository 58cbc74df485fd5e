//! Benchmarks for the logic core
//!
//! Everything here is O(32) or O(1); the benchmarks exist to catch
//! accidental regressions (allocation, hidden recomputation) rather than to
//! chase throughput.

use bitcalc::{Inputs, KMap, OutputBit, TruthTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("truth_table_generate", |b| {
        b.iter(|| black_box(TruthTable::generate()))
    });
}

fn bench_project(c: &mut Criterion) {
    let table = TruthTable::generate();
    c.bench_function("kmap_project_all", |b| {
        b.iter(|| black_box(KMap::project_all(black_box(&table))))
    });
    c.bench_function("kmap_project_single", |b| {
        b.iter(|| black_box(KMap::project(black_box(&table), OutputBit::C1)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_all_inputs", |b| {
        b.iter(|| {
            for index in 0..32 {
                black_box(Inputs::from_index(black_box(index)).outputs());
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_project, bench_evaluate);
criterion_main!(benches);
