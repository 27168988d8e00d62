use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_enumeration::bank::Bank;
use rust_enumeration::processing::{every, filter, find, map, reduce};
use rust_enumeration::types::{Account, AccountKind};

fn sample_bank(n: usize) -> Bank {
    let accounts = (0..n)
        .map(|i| {
            let kind = if i % 3 == 0 {
                AccountKind::Business
            } else {
                AccountKind::Personal
            };
            Account::new(format!("holder-{i}"), (i % 997) as f64, kind)
        })
        .collect();
    Bank::from_accounts(accounts)
}

fn bench_sequence_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_ops");
    for n in [1_000usize, 100_000] {
        let xs: Vec<i64> = (0..n as i64).collect();

        group.bench_with_input(BenchmarkId::new("map", n), &xs, |b, xs| {
            b.iter(|| map(black_box(xs), |x| x * 2))
        });
        group.bench_with_input(BenchmarkId::new("filter", n), &xs, |b, xs| {
            b.iter(|| filter(black_box(xs), |x| x % 2 == 0))
        });
        group.bench_with_input(BenchmarkId::new("find_last", n), &xs, |b, xs| {
            b.iter(|| find(black_box(xs), |x| *x == n as i64 - 1))
        });
        group.bench_with_input(BenchmarkId::new("every", n), &xs, |b, xs| {
            b.iter(|| every(black_box(xs), |x| *x >= 0))
        });
        group.bench_with_input(BenchmarkId::new("reduce", n), &xs, |b, xs| {
            b.iter(|| reduce(black_box(xs), 0i64, |acc, x| acc + x))
        });
    }
    group.finish();
}

fn bench_bank_reports(c: &mut Criterion) {
    let bank = sample_bank(50_000);
    c.bench_function("bank/largest_account", |b| {
        b.iter(|| black_box(&bank).largest_account().map(|a| a.value))
    });
    c.bench_function("bank/business_accounts", |b| {
        b.iter(|| black_box(&bank).business_accounts().len())
    });
    c.bench_function("bank/average_value", |b| {
        b.iter(|| black_box(&bank).average_value())
    });
}

criterion_group!(benches, bench_sequence_ops, bench_bank_reports);
criterion_main!(benches);
