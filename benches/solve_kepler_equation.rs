use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almagest::kepler::{solve_kepler, solve_kepler_with_diagnostics};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Pre-generate (M, e) pairs so the RNG stays out of the timed section.
fn cases(rng: &mut StdRng, samples: usize, e_min: f64, e_max: f64) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rand_angle(rng), rng.random_range(e_min..e_max)))
        .collect()
}

/// Asteroid regime: e ∈ [0.0, 0.4)
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("solve_kepler_equation/typical_e<0.4", |b| {
        b.iter_batched(
            || cases(&mut rng, 10_000, 0.0, 0.4),
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.99)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("solve_kepler_equation/high_e_0.7..0.99", |b| {
        b.iter_batched(
            || cases(&mut rng, 10_000, 0.7, 0.99),
            |cases| {
                for (m, e) in cases {
                    black_box(solve_kepler_with_diagnostics(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-parabolic case close to periapsis, the slowest Newton start.
fn bench_fixed_stress(c: &mut Criterion) {
    let m = 0.01_f64;
    let e = 0.995_f64;

    c.bench_function("solve_kepler_equation/fixed_stress_case", |b| {
        b.iter(|| black_box(solve_kepler_with_diagnostics(black_box(m), black_box(e))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e, bench_fixed_stress
);
criterion_main!(benches);
