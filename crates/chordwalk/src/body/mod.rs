//! Convex-body oracles (ball, H/V-polytopes, zonotopes, ellipsoids).
//!
//! Purpose
//! - One capability set, `Body`, that every sampler step talks to: membership,
//!   ray chords, and coordinate chords with an amortizing cache.
//! - Bodies are read-only after construction. Anything a walk wants to reuse
//!   between steps lives in an explicit cache owned by the walk
//!   (`RayCache`, `CoordCache`), never inside the body.
//!
//! Conventions
//! - Chords are ray parameters `t` along `r + t·v`, normalized to
//!   `entry <= exit`. For `r` inside the body, `entry <= 0 <= exit`.
//! - H-polytopes use `A x <= b`; membership allows `FEAS_EPS` slack. Ball and
//!   ellipsoid membership are exact.
//! - V-polytopes and zonotopes have no facet list (`num_of_hyperplanes() == 0`);
//!   their chords are answered by the LP oracle in `crate::lp`.

mod ball;
mod cache;
mod ellipsoid;
mod error;
mod hpoly;
pub mod special;
mod vpoly;

pub use ball::Ball;
pub use cache::{CoordCache, RayCache};
pub use ellipsoid::Ellipsoid;
pub use error::BodyError;
pub use hpoly::HPolytope;
pub use vpoly::{VPolytope, Zonotope};

use crate::Point;

/// Parameters `(entry, exit)` where a line leaves a body, `entry <= exit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chord {
    pub entry: f64,
    pub exit: f64,
}

impl Chord {
    /// Build a chord from two crossings given in any order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { entry: a, exit: b }
        } else {
            Self { entry: b, exit: a }
        }
    }

    /// Zero-length chord at the ray origin.
    #[inline]
    pub fn degenerate() -> Self {
        Self {
            entry: 0.0,
            exit: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.exit - self.entry
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.len() <= 0.0
    }

    /// Affine pick on the chord: `u = 0` gives `entry`, `u -> 1` gives `exit`.
    #[inline]
    pub fn lerp(&self, u: f64) -> f64 {
        u * (self.exit - self.entry) + self.entry
    }

    /// Intersection of two chords on the same line.
    #[inline]
    pub fn intersect(&self, other: &Chord) -> Chord {
        Chord {
            entry: self.entry.max(other.entry),
            exit: self.exit.min(other.exit),
        }
    }

    #[inline]
    pub fn entry_point(&self, r: &Point, v: &Point) -> Point {
        r + v * self.entry
    }

    #[inline]
    pub fn exit_point(&self, r: &Point, v: &Point) -> Point {
        r + v * self.exit
    }
}

/// Membership and boundary oracle of a convex body.
///
/// Preconditions shared by all chord queries: `r` lies in the body and `v` is
/// nonzero. Violations are the caller's responsibility; some variants check
/// them with `debug_assert!` only.
pub trait Body {
    fn dimension(&self) -> usize;

    /// Facet count of the H-representation; 0 for bodies without one.
    fn num_of_hyperplanes(&self) -> usize;

    fn is_in(&self, p: &Point) -> bool;

    /// Both boundary crossings of the line `{r + t·v}`.
    fn line_intersect(&self, r: &Point, v: &Point) -> Chord;

    /// `line_intersect` with products against the facet matrix reused across
    /// steps.
    ///
    /// Contract: if `cache` was primed by a previous call with direction
    /// `v_prev` at point `r_prev`, then `r == r_prev + last_step * v_prev`.
    /// Bodies without facets ignore the cache.
    fn line_intersect_cached(
        &self,
        r: &Point,
        v: &Point,
        cache: &mut RayCache,
        last_step: f64,
    ) -> Chord {
        let _ = (cache, last_step);
        self.line_intersect(r, v)
    }

    /// Crossings of the line through `r` along coordinate axis `axis`.
    ///
    /// With `init == false` and a primed cache, `r` must differ from the
    /// previously queried point only in the previously queried axis.
    fn line_intersect_coord(
        &self,
        r: &Point,
        axis: usize,
        cache: &mut CoordCache,
        init: bool,
    ) -> Chord {
        let _ = (cache, init);
        self.query_dual(r, axis)
    }

    /// Coordinate chord computed from scratch (no cache).
    fn query_dual(&self, r: &Point, axis: usize) -> Chord;
}

impl<B: Body + ?Sized> Body for &B {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn num_of_hyperplanes(&self) -> usize {
        (**self).num_of_hyperplanes()
    }
    fn is_in(&self, p: &Point) -> bool {
        (**self).is_in(p)
    }
    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        (**self).line_intersect(r, v)
    }
    fn line_intersect_cached(
        &self,
        r: &Point,
        v: &Point,
        cache: &mut RayCache,
        last_step: f64,
    ) -> Chord {
        (**self).line_intersect_cached(r, v, cache, last_step)
    }
    fn line_intersect_coord(
        &self,
        r: &Point,
        axis: usize,
        cache: &mut CoordCache,
        init: bool,
    ) -> Chord {
        (**self).line_intersect_coord(r, axis, cache, init)
    }
    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        (**self).query_dual(r, axis)
    }
}

impl<B: Body + ?Sized> Body for Box<B> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn num_of_hyperplanes(&self) -> usize {
        (**self).num_of_hyperplanes()
    }
    fn is_in(&self, p: &Point) -> bool {
        (**self).is_in(p)
    }
    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        (**self).line_intersect(r, v)
    }
    fn line_intersect_cached(
        &self,
        r: &Point,
        v: &Point,
        cache: &mut RayCache,
        last_step: f64,
    ) -> Chord {
        (**self).line_intersect_cached(r, v, cache, last_step)
    }
    fn line_intersect_coord(
        &self,
        r: &Point,
        axis: usize,
        cache: &mut CoordCache,
        init: bool,
    ) -> Chord {
        (**self).line_intersect_coord(r, axis, cache, init)
    }
    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        (**self).query_dual(r, axis)
    }
}

#[cfg(test)]
mod tests;
