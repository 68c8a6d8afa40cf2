//! Coordinate-directions hit-and-run.

use rand::Rng;

use super::{sample_axis, BoundaryPair, RandomWalk};
use crate::body::{Body, Chord, CoordCache};
use crate::Point;

/// Walk state: current point and the coordinate cache of `A·r`.
///
/// Only the first chord query after (re)initialization rebuilds the cache;
/// every later query updates it by the single coordinate that moved.
#[derive(Clone, Debug)]
pub struct CoordinateHitAndRun {
    p: Point,
    lambda: f64,
    cache: CoordCache,
}

impl CoordinateHitAndRun {
    pub fn reinitialize<B, R>(&mut self, body: &B, start: &Point, rng: &mut R)
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        *self = <Self as RandomWalk>::new(body, start, rng);
    }

    #[inline]
    pub fn last_step(&self) -> f64 {
        self.lambda
    }

    fn step<B, R>(&mut self, body: &B, init: bool, rng: &mut R) -> (usize, Chord)
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        let axis = sample_axis(body.dimension(), rng);
        let chord = body.line_intersect_coord(&self.p, axis, &mut self.cache, init);
        self.lambda = chord.lerp(rng.gen::<f64>());
        (axis, chord)
    }
}

impl RandomWalk for CoordinateHitAndRun {
    fn new<B, R>(body: &B, start: &Point, rng: &mut R) -> Self
    where
        B: Body + ?Sized,
        R: Rng + ?Sized,
    {
        let mut walk = Self {
            p: start.clone(),
            lambda: 0.0,
            cache: CoordCache::new(body.num_of_hyperplanes()),
        };
        let (axis, _) = walk.step(body, true, rng);
        walk.p[axis] += walk.lambda;
        walk
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
            let (axis, chord) = self.step(body, false, rng);
            if j + 1 == walk_length {
                let mut entry = self.p.clone();
                let mut exit = self.p.clone();
                entry[axis] += chord.entry;
                exit[axis] += chord.exit;
                last = Some(BoundaryPair { entry, exit });
            }
            self.p[axis] += self.lambda;
        }
        last
    }
}
