//! Criterion benchmarks for the decision engine.
//!
//! Measures evaluation time across matrix sizes to track the cost of the
//! O(N x M) pipeline and catch regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package topsis-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use topsis_core::{Alternative, DecisionMatrix, Impact, Impacts, Weights, evaluate};

/// Fixed seed so every run benchmarks the same matrices.
const BENCHMARK_SEED: u64 = 0x7095_1515;

/// Matrix shapes to benchmark as (alternatives, criteria).
const SHAPES: &[(usize, usize)] = &[(100, 4), (1_000, 8), (10_000, 16)];

fn generate_problem(alternatives: usize, criteria: usize) -> (DecisionMatrix, Weights, Impacts) {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCHMARK_SEED);
    let rows = (0..alternatives)
        .map(|index| {
            let values = (0..criteria).map(|_| rng.gen_range(1.0..1_000.0)).collect();
            Alternative::new(format!("alt-{index}"), values)
        })
        .collect();
    let matrix = DecisionMatrix::new(rows).expect("generated matrix is valid");
    let weights = Weights::new((0..criteria).map(|_| rng.gen_range(0.1..2.0)).collect())
        .expect("generated weights are valid");
    let impacts = (0..criteria)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Impact::Maximize
            } else {
                Impact::Minimize
            }
        })
        .collect();
    (matrix, weights, impacts)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for &(alternatives, criteria) in SHAPES {
        let (matrix, weights, impacts) = generate_problem(alternatives, criteria);
        let cells = u64::try_from(alternatives * criteria).expect("cell count fits in u64");
        group.throughput(Throughput::Elements(cells));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{alternatives}x{criteria}")),
            &(matrix, weights, impacts),
            |b, (matrix, weights, impacts)| {
                b.iter(|| evaluate(matrix, weights, impacts).expect("benchmark evaluation"));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
