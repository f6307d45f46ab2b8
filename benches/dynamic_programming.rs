use algos::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    for n in [10u32, 20, 25] {
        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter(|| fib_recursive(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("memo", n), &n, |b, &n| {
            b.iter(|| fib_memo(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("tabulation", n), &n, |b, &n| {
            b.iter(|| fib_tabulation(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("optimized", n), &n, |b, &n| {
            b.iter(|| fib_optimized(black_box(n)))
        });
    }

    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    let (a, b) = ("ACCGGTCGAGTG", "GTCGTTCGGAAT");

    group.bench_function("recursive", |bch| {
        bch.iter(|| lcs_recursive(black_box(a), black_box(b)))
    });
    group.bench_function("memo", |bch| bch.iter(|| lcs_memo(black_box(a), black_box(b))));
    group.bench_function("tabulation", |bch| {
        bch.iter(|| lcs_tabulation(black_box(a), black_box(b)))
    });
    group.bench_function("length", |bch| {
        bch.iter(|| lcs_length(black_box(a), black_box(b)))
    });

    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    let items: Vec<Item> = (1..=16)
        .map(|i| Item::new(i * 3 % 17 + 1, (i * 7 % 23 + 1) as u64))
        .collect();
    let capacity = 60;

    group.bench_function("recursive", |b| {
        b.iter(|| knapsack_recursive(black_box(&items), black_box(capacity)))
    });
    group.bench_function("tabulation", |b| {
        b.iter(|| knapsack_tabulation(black_box(&items), black_box(capacity)))
    });

    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_lcs, bench_knapsack);
criterion_main!(benches);
