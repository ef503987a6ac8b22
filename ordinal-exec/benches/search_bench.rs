// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use ordinal_core::Sequence;
use ordinal_exec::SearchExt;
use ordinal_test_utils::TestError;
use std::hint::black_box;
use tokio::runtime::Runtime;

/// Benchmarks find with the only match in the last slot, the worst case for
/// both execution modes.
pub fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_last");
    let sizes = [100usize, 1000usize, 10000];
    let rt = Runtime::new().unwrap();

    for &size in &sizes {
        let sequence: Sequence<usize> = (0..size).collect();
        let target = size - 1;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("parallel", size), &sequence, |bencher, seq| {
            bencher.iter(|| {
                let found = rt.block_on(seq.find(move |element| async move {
                    Ok::<_, TestError>(element.value == target)
                }));
                black_box(found.unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("series", size), &sequence, |bencher, seq| {
            bencher.iter(|| {
                let found = rt.block_on(seq.find_series(move |element| async move {
                    Ok::<_, TestError>(element.value == target)
                }));
                black_box(found.unwrap());
            });
        });
    }

    group.finish();
}
