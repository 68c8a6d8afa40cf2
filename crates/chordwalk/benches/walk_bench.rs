//! Criterion benches for the hit-and-run walks.
//!
//! - Boundary RDHR vs coordinate hit-and-run on hypercubes (d = 5, 10, 20).
//! - Same walks on a ball-cut cube, which adds the uncached ball query per step.
//!
//! Results live under `target/criterion`.

use chordwalk::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

const STEPS: u32 = 100;

fn bench_walks_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_cube");
    for d in [5usize, 10, 20] {
        let cube = special::hypercube(d, 1.0).unwrap();
        let origin = Point::zeros(d);
        group.bench_function(BenchmarkId::new("brdhr", d), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(17);
                    let walk = BoundaryRdhrWalk::new(&cube, &origin, &mut rng);
                    (walk, rng)
                },
                |(mut walk, mut rng)| {
                    let _ = walk.apply(&cube, STEPS, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("cdhr", d), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(17);
                    let walk = CoordinateHitAndRun::new(&cube, &origin, &mut rng);
                    (walk, rng)
                },
                |(mut walk, mut rng)| {
                    let _ = walk.apply(&cube, STEPS, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_walks_ball_polytope(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_ball_polytope");
    for d in [5usize, 10] {
        let body: BallPolytope<HPolytope> = Intersection::new(
            special::hypercube(d, 1.0).unwrap(),
            Ball::centered(d, 1.5).unwrap(),
        );
        let origin = Point::zeros(d);
        group.bench_function(BenchmarkId::new("brdhr", d), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(29);
                    let walk = BoundaryRdhrWalk::new(&body, &origin, &mut rng);
                    (walk, rng)
                },
                |(mut walk, mut rng)| {
                    let _ = walk.apply(&body, STEPS, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("cdhr", d), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(29);
                    let walk = CoordinateHitAndRun::new(&body, &origin, &mut rng);
                    (walk, rng)
                },
                |(mut walk, mut rng)| {
                    let _ = walk.apply(&body, STEPS, &mut rng);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walks_cube, bench_walks_ball_polytope);
criterion_main!(benches);
