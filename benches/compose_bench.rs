//! Benchmark for composition combinators: optional chaining, positional
//! fixing and tuple adaptation.
//!
//! Each combinator is measured against the hand-written closure it replaces.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fncomb::compose::{
    BinaryFunction, SenaryFunction, chain, chain_flat, into_second, tupled2, untupled2,
};
use std::hint::black_box;

// =============================================================================
// Optional Chaining Benchmarks
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain");

    let parse = |text: &str| text.parse::<i64>().ok();
    let double = |number: i64| number * 2;

    group.bench_function("hand_written", |bencher| {
        let function = |text: &str| parse(text).map(double);
        bencher.iter(|| black_box(function(black_box("12345"))));
    });

    group.bench_function("chain", |bencher| {
        let function = chain(parse, double);
        bencher.iter(|| black_box(function(black_box("12345"))));
    });

    group.bench_function("chain_flat_absent", |bencher| {
        let function = chain_flat(parse, |number: i64| number.checked_div(0));
        bencher.iter(|| black_box(function(black_box("12345"))));
    });

    group.finish();
}

// =============================================================================
// Positional Fixing Benchmarks
// =============================================================================

fn benchmark_fix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fix");

    let concat = |first: &str, second: &str| {
        let mut result = String::with_capacity(first.len() + second.len());
        result.push_str(first);
        result.push_str(second);
        result
    };

    group.bench_function("into_second", |bencher| {
        let function = into_second(", Co.", concat);
        bencher.iter(|| black_box(function(black_box("LithoByte"))));
    });

    group.bench_function("fix_first", |bencher| {
        let function = concat.fix_first("LithoByte");
        bencher.iter(|| black_box(function(black_box(", Co."))));
    });

    for depth in [1_usize, 3, 5] {
        group.bench_with_input(BenchmarkId::new("senary_fixed", depth), &depth, |bencher, &depth| {
            let sum = |a: u64, b: u64, c: u64, d: u64, e: u64, f: u64| a + b + c + d + e + f;
            let fixed = sum.fix_first(1);
            bencher.iter(|| {
                let mut total = 0;
                for _ in 0..depth {
                    total += fixed(black_box(2), 3, 4, 5, 6);
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Tuple Benchmarks
// =============================================================================

fn benchmark_tuple(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tuple");

    let add = |a: i64, b: i64| a + b;
    let pairs: Vec<(i64, i64)> = (0..1000).map(|index| (index, index * 2)).collect();

    group.bench_function("tupled_map", |bencher| {
        let function = tupled2(add);
        bencher.iter(|| black_box(pairs.iter().copied().map(&function).sum::<i64>()));
    });

    group.bench_function("round_trip", |bencher| {
        let function = untupled2(tupled2(add));
        bencher.iter(|| black_box(function(black_box(20), black_box(22))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_chain, benchmark_fix, benchmark_tuple);
criterion_main!(benches);
