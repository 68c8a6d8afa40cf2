//! Sample a ball-cut cube with both walks and print summary statistics.
//!
//! Usage:
//!   cargo run -p chordwalk --example ball_polytope_walk -- [dim] [n]
//!
//! The start point is the Chebychev center of the cube. For each walk the
//! example prints the mean norm of interior samples and of boundary samples;
//! the latter lies between 1 (cube facets) and the ball radius.

use anyhow::{Context, Result};
use chordwalk::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let mut args = std::env::args().skip(1);
    let dim: usize = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("dim must be a positive integer")?
        .unwrap_or(5);
    let n: usize = args
        .next()
        .map(|s| s.parse())
        .transpose()
        .context("n must be a non-negative integer")?
        .unwrap_or(1000);

    let cube = special::hypercube(dim, 1.0)?;
    let start = cube.chebychev_ball()?.center;
    let radius = 0.5 * (1.0 + (dim as f64).sqrt());
    let body: BallPolytope<HPolytope> = Intersection::new(cube, Ball::centered(dim, radius)?);
    tracing::info!(dim, n, radius, "ball-cut cube");

    let cfg = SamplerCfg {
        walk_length: 10,
        burn_in: 100,
    };
    let mut rng = StdRng::seed_from_u64(2025);

    let pts = uniform_points::<BoundaryRdhrWalk, _, _>(&body, &start, n, &cfg, &mut rng)?;
    let edge = boundary_points::<BoundaryRdhrWalk, _, _>(&body, &start, n, &cfg, &mut rng)?;
    report("brdhr", &pts, &edge);

    let pts = uniform_points::<CoordinateHitAndRun, _, _>(&body, &start, n, &cfg, &mut rng)?;
    let edge = boundary_points::<CoordinateHitAndRun, _, _>(&body, &start, n, &cfg, &mut rng)?;
    report("cdhr", &pts, &edge);
    Ok(())
}

fn mean_norm(pts: &[Point]) -> f64 {
    if pts.is_empty() {
        return 0.0;
    }
    pts.iter().map(|p| p.norm()).sum::<f64>() / pts.len() as f64
}

fn report(walk: &str, inner: &[Point], boundary: &[Point]) {
    println!(
        "{walk}: {} interior samples, mean |x| = {:.4}; {} boundary samples, mean |x| = {:.4}",
        inner.len(),
        mean_norm(inner),
        boundary.len(),
        mean_norm(boundary)
    );
}
