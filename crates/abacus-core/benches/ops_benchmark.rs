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

use abacus_core::ops::elementary::{add, divide, multiply, subtract};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmarks the four operations over a fixed batch of operand pairs, so
/// the division guard's branch shows up relative to the unguarded ops.
fn bench_elementary(c: &mut Criterion) {
    let pairs: Vec<(f64, f64)> = (1..=1024)
        .map(|i| (i as f64 * 1.5, (1025 - i) as f64 * 0.25))
        .collect();

    let mut group = c.benchmark_group("elementary");
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("add", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(add(black_box(x), black_box(y)));
            }
        })
    });

    group.bench_function("subtract", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(subtract(black_box(x), black_box(y)));
            }
        })
    });

    group.bench_function("multiply", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(multiply(black_box(x), black_box(y)));
            }
        })
    });

    group.bench_function("divide", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                let _ = black_box(divide(black_box(x), black_box(y)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_elementary);
criterion_main!(benches);
