use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_enumeration::execution::{ExecutionEngine, ExecutionOptions};
use rust_enumeration::processing::{filter, map};

fn busy(x: &u64) -> u64 {
    // A little arithmetic per element so threading has something to amortize.
    (0..32).fold(*x, |acc, i| acc.wrapping_mul(6364136223846793005).wrapping_add(i))
}

fn bench_parallel_vs_sequential(c: &mut Criterion) {
    let xs: Vec<u64> = (0..200_000).collect();
    let mut group = c.benchmark_group("map_filter");

    group.bench_function(BenchmarkId::new("sequential", xs.len()), |b| {
        b.iter(|| {
            let mapped = map(black_box(&xs), busy);
            filter(&mapped, |x| x % 7 == 0).len()
        })
    });

    for threads in [2usize, 4] {
        let engine = ExecutionEngine::new(ExecutionOptions {
            num_threads: Some(threads),
            chunk_size: 4_096,
            max_in_flight_chunks: threads,
        })
        .expect("valid engine options");

        group.bench_function(BenchmarkId::new("parallel", threads), |b| {
            b.iter(|| {
                let mapped = engine.map_parallel(black_box(&xs), busy);
                engine.filter_parallel(&mapped, |x| x % 7 == 0).len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parallel_vs_sequential);
criterion_main!(benches);
