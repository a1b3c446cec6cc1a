//! Criterion benchmarks: sequential baseline vs fan-out.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fanout_core::concurrent::ConcurrentExecutor;
use fanout_core::executor::Executor;
use fanout_core::fibonacci::Fibonacci;
use fanout_core::observers::NoOpObserver;
use fanout_core::primality::PrimalityCheck;
use fanout_core::sequential::SequentialExecutor;

fn bench_fibonacci(c: &mut Criterion) {
    let kernel = Fibonacci::new();
    let observer = NoOpObserver::new();
    // One heavy element among cheap ones: fan-out time tracks the heaviest.
    let batches: Vec<Vec<i64>> = vec![
        vec![20; 8],
        vec![24, 5, 5, 5, 5, 5, 5, 5],
        vec![22, 23, 24, 25],
    ];

    let mut group = c.benchmark_group("Fibonacci");
    for batch in &batches {
        let id = format!("{batch:?}");
        group.bench_with_input(BenchmarkId::new("linear", &id), batch, |b, batch| {
            b.iter(|| SequentialExecutor.execute(&kernel, batch, &observer).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("concurrent", &id), batch, |b, batch| {
            b.iter(|| ConcurrentExecutor.execute(&kernel, batch, &observer).unwrap());
        });
    }
    group.finish();
}

fn bench_primality(c: &mut Criterion) {
    let kernel = PrimalityCheck::new();
    let observer = NoOpObserver::new();
    let sizes = [16usize, 256];

    let mut group = c.benchmark_group("PrimalityCheck");
    for &size in &sizes {
        let batch: Vec<i64> = (0..size as i64).map(|i| 1_000_000_007 + 2 * i).collect();
        group.bench_with_input(BenchmarkId::new("linear", size), &batch, |b, batch| {
            b.iter(|| SequentialExecutor.execute(&kernel, batch, &observer).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("concurrent", size), &batch, |b, batch| {
            b.iter(|| ConcurrentExecutor.execute(&kernel, batch, &observer).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_primality);
criterion_main!(benches);
