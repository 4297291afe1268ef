//! Benchmarks for position-addressed list operations across list sizes.
//!
//! Run with: cargo bench
//!
//! If the operations are O(1), throughput should stay flat as the list
//! grows; the per-size groups make regressions easy to spot.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use poslist::{PosList, Position};

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn build(n: usize) -> (PosList<u64>, Vec<Position>) {
    let mut list = PosList::new();
    let handles = (0..n as u64).map(|i| list.append(i)).collect();
    (list, handles)
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(1));

    for n in SIZES {
        let (list, handles) = build(n);
        let mid = handles[n / 2];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(list.get(black_box(mid)).unwrap()));
        });
    }

    group.finish();
}

fn bench_splice_mid(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_after_remove_mid");
    group.throughput(Throughput::Elements(1));

    for n in SIZES {
        let (mut list, handles) = build(n);
        let mid = handles[n / 2];

        // Insert/remove pair keeps the list size stable across iterations
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pos = list.insert_after(mid, 0).unwrap();
                black_box(list.remove(pos).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_insert_before_mid(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_before_remove_mid");
    group.throughput(Throughput::Elements(1));

    for n in SIZES {
        let (mut list, handles) = build(n);
        let mid = handles[n / 2];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pos = list.insert_before(mid, 0).unwrap();
                black_box(list.remove(pos).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend_remove_front");
    group.throughput(Throughput::Elements(1));

    for n in SIZES {
        let (mut list, _) = build(n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pos = list.prepend(0);
                black_box(list.remove(pos).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_append_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("batch_10k", |b| {
        b.iter(|| {
            let mut list = PosList::new();
            for i in 0..10_000u64 {
                black_box(list.append(i));
            }
            list
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get,
    bench_splice_mid,
    bench_insert_before_mid,
    bench_ends,
    bench_append_grow
);
criterion_main!(benches);
