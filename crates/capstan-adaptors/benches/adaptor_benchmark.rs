// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use capstan_adaptors::delta::delta;
use capstan_adaptors::filter::filter;
use capstan_adaptors::fold::partial_sums;
use capstan_adaptors::merge::merge2;
use capstan_core::cursor::{Cursor, CursorExt};
use capstan_core::range::slice::SliceCursor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

fn sorted_input(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    let mut v: Vec<i64> = (0..len).map(|_| rng.gen_range(0..1_000_000)).collect();
    v.sort_unstable();
    v
}

fn drain_sum<C>(mut c: C) -> i64
where
    C: Cursor<Item = i64>,
{
    let mut total = 0;
    while c.has_current() {
        total += c.current();
        c.advance();
    }
    total
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge2");
    for len in [1_000usize, 10_000, 100_000] {
        let a = sorted_input(len);
        let b = sorted_input(len);
        group.throughput(Throughput::Elements((2 * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| {
                let merged = merge2(
                    SliceCursor::new(black_box(&a)),
                    SliceCursor::new(black_box(&b)),
                );
                drain_sum(merged)
            });
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_fold_pipeline");
    for len in [1_000usize, 100_000] {
        let data = sorted_input(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| {
                let evens = filter(|x: &i64| x % 2 == 0, SliceCursor::new(black_box(&data)));
                drain_sum(partial_sums(evens))
            });
        });
    }
    group.finish();
}

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");
    for len in [1_000usize, 100_000] {
        let data = sorted_input(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, _| {
            bencher.iter(|| {
                let gaps: Vec<i64> = delta(SliceCursor::new(black_box(&data))).values().collect();
                black_box(gaps)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge, bench_pipeline, bench_delta);
criterion_main!(benches);
