//! Benchmarks for matrix multiplication schedules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lineal::linalg::multiplication::{self, MultiplicationConfig};
use lineal::linalg::Matrix;
use lineal::rings::{Fp, PrimeField, RationalField, Q};

fn bench_rational_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_q");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [16, 32, 64] {
        let a = Matrix::<Q>::random(size, size, RationalField, &mut rng);
        let b = Matrix::<Q>::random(size, size, RationalField, &mut rng);
        let config = MultiplicationConfig {
            truncation_point: 8,
            ..MultiplicationConfig::default()
        };

        group.bench_with_input(BenchmarkId::new("simple", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::simple(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("school", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::school(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("winograd", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::strassen_winograd_with(&a, &b, &config)))
        });
    }

    group.finish();
}

fn bench_prime_field_strassen(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_fp");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let Ok(field) = PrimeField::new(65_521) else {
        return;
    };

    for size in [64, 128, 256] {
        let a = Matrix::<Fp>::random(size, size, field.clone(), &mut rng);
        let b = Matrix::<Fp>::random(size, size, field.clone(), &mut rng);

        group.bench_with_input(BenchmarkId::new("simple", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::simple(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("original", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::strassen_original(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("winograd", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::strassen_winograd(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("bodrato", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::strassen_bodrato(&a, &b)))
        });

        let parallel = MultiplicationConfig {
            parallel_depth: 2,
            ..MultiplicationConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("bodrato_par", size), &size, |bench, _| {
            bench.iter(|| black_box(multiplication::strassen_bodrato_with(&a, &b, &parallel)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rational_multiplication,
    bench_prime_field_strassen
);
criterion_main!(benches);
