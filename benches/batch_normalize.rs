//! Benchmarks for bulk normalization comparing sequential vs parallel runs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parcelfmt::{detect, normalize_batch, ParallelConfig, TemplateSet};
use std::hint::black_box;

/// Raw identifiers in a mix of formats; roughly one in five matches no template.
fn create_raw_identifiers(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 5 {
            0 => format!("{:09}", i),
            1 => format!("{:02} {:03} {:04}", i % 100, i % 1000, i % 10000),
            2 => format!("{:03}-{:02}-{:02}-{:03}", i % 1000, i % 100, i % 100, i % 1000),
            3 => format!("{:010}", i),
            _ => format!("{}", i % 1000),
        })
        .collect()
}

fn templates() -> TemplateSet {
    TemplateSet::from_examples(["12-345.6789", "123-45.67-890"])
}

fn bench_detect_single(c: &mut Criterion) {
    let templates = templates();
    c.bench_function("detect_single_identifier", |b| {
        b.iter(|| detect(black_box("123-45-67-890"), &templates))
    });
}

fn bench_batch_sequential_vs_parallel(c: &mut Criterion) {
    let templates = templates();
    let mut group = c.benchmark_group("batch_seq_vs_parallel");

    for size in [1_000usize, 100_000] {
        let raws = create_raw_identifiers(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &raws, |b, raws| {
            b.iter(|| normalize_batch(black_box(raws), &templates, &ParallelConfig::sequential()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &raws, |b, raws| {
            b.iter(|| normalize_batch(black_box(raws), &templates, &ParallelConfig::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detect_single, bench_batch_sequential_vs_parallel);
criterion_main!(benches);
