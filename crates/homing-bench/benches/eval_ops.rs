//! Criterion micro-benchmarks for sequential, chunked, and parallel folds.

use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{criterion_group, criterion_main, Criterion};
use homing_bench::{noisy_sequence, parallel_profile, random_sequence};
use homing_core::DirectivePolicy;
use homing_eval::{displacement_chunked, DisplacementEvaluator, EvalConfig};

const LEN: usize = 1_000_000;

/// Benchmark: lenient free-function evaluate on 1M directives.
fn bench_evaluate_lenient_1m(c: &mut Criterion) {
    let seq = random_sequence(LEN, 42);

    c.bench_function("evaluate_lenient_1m", |b| {
        b.iter(|| black_box(homing_eval::evaluate(black_box(&seq))));
    });
}

/// Benchmark: strict evaluator on 1M characters, no invalid input.
fn bench_evaluate_strict_1m(c: &mut Criterion) {
    let seq = random_sequence(LEN, 42);
    let ev = DisplacementEvaluator::new(EvalConfig::strict()).unwrap();

    c.bench_function("evaluate_strict_1m", |b| {
        b.iter(|| black_box(ev.evaluate(black_box(&seq))));
    });
}

/// Benchmark: lenient evaluate on 1M characters with 1-in-8 noise.
fn bench_evaluate_noisy_1m(c: &mut Criterion) {
    let seq = noisy_sequence(LEN, 42, 8);

    c.bench_function("evaluate_noisy_1m", |b| {
        b.iter(|| black_box(homing_eval::evaluate(black_box(&seq))));
    });
}

/// Benchmark: chunked fold (64K chunks) on a pre-collected 1M buffer.
fn bench_chunked_1m(c: &mut Criterion) {
    let chars: Vec<char> = random_sequence(LEN, 42).chars().collect();
    let chunk = NonZeroUsize::new(64 * 1024).unwrap();

    c.bench_function("chunked_64k_1m", |b| {
        b.iter(|| {
            black_box(displacement_chunked(
                black_box(chars.as_slice()),
                chunk,
                DirectivePolicy::Lenient,
            ))
        });
    });
}

/// Benchmark: parallel evaluator with 4 workers on 1M directives.
fn bench_parallel_4w_1m(c: &mut Criterion) {
    let seq = random_sequence(LEN, 42);
    let ev = DisplacementEvaluator::new(parallel_profile(4, DirectivePolicy::Lenient)).unwrap();

    c.bench_function("parallel_4w_1m", |b| {
        b.iter(|| black_box(ev.evaluate(black_box(&seq))));
    });
}

criterion_group!(
    benches,
    bench_evaluate_lenient_1m,
    bench_evaluate_strict_1m,
    bench_evaluate_noisy_1m,
    bench_chunked_1m,
    bench_parallel_4w_1m
);
criterion_main!(benches);
