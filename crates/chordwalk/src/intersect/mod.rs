//! Intersections of two bodies behind the `Body` interface.
//!
//! Purpose
//! - Let a walk treat `P ∩ Q` as an ordinary body without deriving an explicit
//!   combined boundary (impossible in general for curved + polyhedral mixes).
//!   Everything is decided per call by delegating to the two members.
//!
//! Rules
//! - Membership: `P` first, then `Q` (short-circuit).
//! - Dimension and facet count come from `P`; `Q` contributes no hyperplanes,
//!   so walk caches are sized for `P` only and `Q` is always queried uncached.
//! - Ray chords: start from `P`'s chord. Each endpoint is kept if its point lies
//!   in `Q`, otherwise replaced by `Q`'s matching endpoint. `Q`'s chord is
//!   solved at most once per call.
//! - Coordinate chords: both members are queried independently and the two
//!   intervals on the same line are intersected.

use crate::body::{Ball, Body, Chord, CoordCache, Ellipsoid, RayCache};
use crate::Point;

/// `first ∩ second` over a common coordinate space.
#[derive(Clone, Debug)]
pub struct Intersection<P, Q> {
    first: P,
    second: Q,
}

/// Polytope (or any body) cut by a ball.
pub type BallPolytope<P> = Intersection<P, Ball>;
/// Polytope (or any body) cut by an ellipsoid.
pub type PolytopeEllipsoid<P> = Intersection<P, Ellipsoid>;
/// Ball-cut polytope further cut by an ellipsoid.
pub type BallPolytopeEllipsoid<P> = Intersection<BallPolytope<P>, Ellipsoid>;

impl<P: Body, Q: Body> Intersection<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        debug_assert_eq!(first.dimension(), second.dimension());
        Self { first, second }
    }

    #[inline]
    pub fn first(&self) -> &P {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &Q {
        &self.second
    }

    pub fn into_parts(self) -> (P, Q) {
        (self.first, self.second)
    }

    /// Substitute endpoints of `P`'s chord that fall outside `Q`.
    fn clip(&self, r: &Point, v: &Point, chord: Chord) -> Chord {
        let mut second_chord: Option<Chord> = None;
        let mut second = || *second_chord.get_or_insert_with(|| self.second.line_intersect(r, v));
        let entry = if self.second.is_in(&chord.entry_point(r, v)) {
            chord.entry
        } else {
            second().entry
        };
        let exit = if self.second.is_in(&chord.exit_point(r, v)) {
            chord.exit
        } else {
            second().exit
        };
        Chord { entry, exit }
    }
}

impl<P: Body, Q: Body> Body for Intersection<P, Q> {
    fn dimension(&self) -> usize {
        self.first.dimension()
    }

    fn num_of_hyperplanes(&self) -> usize {
        self.first.num_of_hyperplanes()
    }

    fn is_in(&self, p: &Point) -> bool {
        self.first.is_in(p) && self.second.is_in(p)
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        let chord = self.first.line_intersect(r, v);
        self.clip(r, v, chord)
    }

    fn line_intersect_cached(
        &self,
        r: &Point,
        v: &Point,
        cache: &mut RayCache,
        last_step: f64,
    ) -> Chord {
        let chord = self.first.line_intersect_cached(r, v, cache, last_step);
        self.clip(r, v, chord)
    }

    fn line_intersect_coord(
        &self,
        r: &Point,
        axis: usize,
        cache: &mut CoordCache,
        init: bool,
    ) -> Chord {
        let first = self.first.line_intersect_coord(r, axis, cache, init);
        first.intersect(&self.second.query_dual(r, axis))
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        self.first
            .query_dual(r, axis)
            .intersect(&self.second.query_dual(r, axis))
    }
}
