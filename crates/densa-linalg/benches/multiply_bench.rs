//! Benchmarks for matrix multiplication.
//!
//! Includes:
//! - Fixed-size native kernels against the generic AXPY path
//! - Parallel divide-and-conquer on tall products
//! - Exact rational products

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use densa_linalg::{multiply, multiply_primitive, DenseMatrix, MultiplyConfig};
use densa_scalar::Rational;

fn random_matrix(rng: &mut ChaCha8Rng, rows: usize, cols: usize) -> DenseMatrix<f64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    DenseMatrix::from_column_major(rows, cols, data)
}

/// Native kernels against the generic path for small products.
fn bench_small_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_kernels");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let config = MultiplyConfig::default();

    for size in [2, 4, 5, 8, 10] {
        let left = random_matrix(&mut rng, size, size);
        let right = random_matrix(&mut rng, size, size);

        group.bench_with_input(BenchmarkId::new("primitive", size), &size, |b, _| {
            b.iter(|| black_box(multiply_primitive(&left, &right, &config)))
        });
        group.bench_with_input(BenchmarkId::new("generic", size), &size, |b, _| {
            b.iter(|| black_box(multiply(&left, &right, &config)))
        });
    }

    group.finish();
}

/// Products tall enough to take the parallel path.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for size in [64, 128, 256] {
        let left = random_matrix(&mut rng, size, size);
        let right = random_matrix(&mut rng, size, size);

        group.bench_with_input(BenchmarkId::new("threshold_32", size), &size, |b, _| {
            let config = MultiplyConfig::default();
            b.iter(|| black_box(multiply_primitive(&left, &right, &config)))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            let config = MultiplyConfig { threshold: usize::MAX };
            b.iter(|| black_box(multiply_primitive(&left, &right, &config)))
        });
    }

    group.finish();
}

/// Exact arithmetic on a small product.
fn bench_rational(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational");
    let config = MultiplyConfig::default();

    for size in [4, 8] {
        let entries = |offset: i64| -> Vec<Rational> {
            (0..size * size)
                .map(|i| Rational::from_i64(i64::try_from(i).unwrap_or(0) + offset, 7))
                .collect()
        };
        let left = DenseMatrix::from_column_major(size, size, entries(1));
        let right = DenseMatrix::from_column_major(size, size, entries(-3));

        group.bench_with_input(BenchmarkId::new("generic", size), &size, |b, _| {
            b.iter(|| black_box(multiply(&left, &right, &config)))
        });
    }

    group.finish();
}

criterion_group!(
    multiply_benches,
    bench_small_kernels,
    bench_parallel,
    bench_rational,
);

criterion_main!(multiply_benches);
