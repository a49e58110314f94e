//! Criterion micro-benchmarks for append growth, shifting pops, search, and
//! resize.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_array::{DataLoss, GrowableArray};
use strata_bench::{append_heavy, churn, run_workload};
use strata_core::ElementType;
use strata_test_utils::fixtures::int_array;

/// Benchmark: append 10K values starting from the default capacity.
fn bench_append_10k(c: &mut Criterion) {
    c.bench_function("append_10k", |b| {
        b.iter(|| {
            let mut arr = GrowableArray::<i64>::new(ElementType::Int).unwrap();
            for i in 0..10_000 {
                arr.append(i).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: drain 1K elements from the front, shifting every time.
fn bench_pop_front_1k(c: &mut Criterion) {
    let values: Vec<i64> = (0..1_000).collect();
    c.bench_function("pop_front_1k", |b| {
        b.iter(|| {
            let mut arr = int_array(&values);
            while !arr.is_empty() {
                black_box(arr.pop(0).unwrap());
            }
        });
    });
}

/// Benchmark: search for the last element of a 10K array.
fn bench_index_of_10k(c: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();
    let arr = int_array(&values);
    c.bench_function("index_of_10k", |b| {
        b.iter(|| black_box(arr.index_of(&9_999).unwrap()));
    });
}

/// Benchmark: grow a 10K array to 20K and truncate back.
fn bench_resize_10k(c: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();
    c.bench_function("resize_10k", |b| {
        b.iter(|| {
            let mut arr = int_array(&values);
            arr.resize(20_000, DataLoss::Refuse).unwrap();
            arr.resize(5_000, DataLoss::Accept).unwrap();
            black_box(arr.len());
        });
    });
}

/// Benchmark: replay seeded workloads.
fn bench_workloads(c: &mut Criterion) {
    let heavy = append_heavy(42, 10_000);
    let mixed = churn(42, 10_000, 64);
    c.bench_function("workload_append_heavy", |b| {
        b.iter(|| {
            let mut arr = GrowableArray::<i64>::new(ElementType::Int).unwrap();
            black_box(run_workload(&mut arr, &heavy).unwrap());
        });
    });
    c.bench_function("workload_churn", |b| {
        b.iter(|| {
            let mut arr = GrowableArray::<i64>::new(ElementType::Int).unwrap();
            black_box(run_workload(&mut arr, &mixed).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_append_10k,
    bench_pop_front_1k,
    bench_index_of_10k,
    bench_resize_10k,
    bench_workloads
);
criterion_main!(benches);
