use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almagest::{
    body::Body,
    position::{body_position, PositionOptions},
    Ephemeris,
};

/// Julian Dates spread over 1900–2100
fn random_dates(rng: &mut StdRng, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|_| rng.random_range(2415020.5..2488070.5))
        .collect()
}

/// One body, with and without the speed pass
fn bench_single_body(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("body_position");

    for body in [Body::Sun, Body::Moon, Body::Jupiter, Body::Pluto, Body::Chiron, Body::TrueLilith] {
        for include_speed in [false, true] {
            let options = PositionOptions::default().with_speed(include_speed);
            let label = format!("{body}/speed={include_speed}");
            group.bench_function(label, |b| {
                b.iter_batched(
                    || random_dates(&mut rng, 100),
                    |dates| {
                        for jd in dates {
                            black_box(body_position(black_box(body), black_box(jd), &options));
                        }
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

/// Whole chart: every catalog body at one date
fn bench_all_positions(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let ephemeris = Ephemeris::default();

    c.bench_function("ephemeris/all_positions", |b| {
        b.iter_batched(
            || rng.random_range(2415020.5..2488070.5),
            |jd| black_box(ephemeris.all_positions(black_box(jd))),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_single_body, bench_all_positions
);
criterion_main!(benches);
