//! Random-directions hit-and-run that also reports boundary points.

use rand::Rng;

use super::{sample_direction, BoundaryPair, RandomWalk};
use crate::body::{Body, RayCache};
use crate::Point;

/// Walk state: current point, `A·r` / `A·v` cache, last step length.
#[derive(Clone, Debug)]
pub struct BoundaryRdhrWalk {
    p: Point,
    lambda: f64,
    cache: RayCache,
}

impl BoundaryRdhrWalk {
    /// Discard all state and position the walk from `start` again.
    pub fn reinitialize<B, R>(&mut self, body: &B, start: &Point, rng: &mut R)
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        *self = <Self as RandomWalk>::new(body, start, rng);
    }

    /// Length parameter of the last step (along a unit direction).
    #[inline]
    pub fn last_step(&self) -> f64 {
        self.lambda
    }
}

impl RandomWalk for BoundaryRdhrWalk {
    fn new<B, R>(body: &B, start: &Point, rng: &mut R) -> Self
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        let mut cache = RayCache::new(body.num_of_hyperplanes());
        let v = sample_direction(body.dimension(), rng);
        let chord = body.line_intersect_cached(start, &v, &mut cache, 0.0);
        let lambda = chord.lerp(rng.gen::<f64>());
        Self {
            p: start + v * lambda,
            lambda,
            cache,
        }
    }

    fn current(&self) -> &Point {
        &self.p
    }

    fn apply<B, R>(&mut self, body: &B, walk_length: u32, rng: &mut R) -> Option<BoundaryPair>
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        let mut last = None;
        for j in 0..walk_length {
            let v = sample_direction(body.dimension(), rng);
            let chord = body.line_intersect_cached(&self.p, &v, &mut self.cache, self.lambda);
            self.lambda = chord.lerp(rng.gen::<f64>());
            if j + 1 == walk_length {
                last = Some(BoundaryPair {
                    entry: chord.entry_point(&self.p, &v),
                    exit: chord.exit_point(&self.p, &v),
                });
            }
            self.p.axpy(self.lambda, &v, 1.0);
        }
        last
    }
}
