//! H-polytope `{x : A x <= b}` with amortized chord queries.
//!
//! Chord derivation
//! - Along `r + t·v`, row `i` stays feasible while `t·(a_i·v) <= b_i − a_i·r`.
//!   Rows with `a_i·v > 0` bound `t` from above, rows with `a_i·v < 0` from
//!   below; the chord is the tightest pair. Rows parallel to the line are
//!   skipped, so an unbounded direction yields `±∞`.
//! - Walks keep `A·r` in a cache: after a step `r += λ·v` it becomes
//!   `A·r + λ·(A·v)`, and a coordinate step touches a single column of `A`.

use nalgebra::{DMatrix, DVector};

use super::{Body, BodyError, Chord, CoordCache, RayCache};
use crate::cfg::{FEAS_EPS, PARALLEL_EPS};
use crate::lp::{self, ChebychevBall, LpError};
use crate::Point;

/// Polytope given by `m` inequalities in R^d.
///
/// Invariants:
/// - `a` is `m × d`, `b` has length `m`; rows need not be normalized.
#[derive(Clone, Debug)]
pub struct HPolytope {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl HPolytope {
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self, BodyError> {
        if a.nrows() != b.len() {
            return Err(BodyError::mismatch(a.nrows(), b.len()));
        }
        if a.ncols() == 0 {
            return Err(BodyError::invalid("polytope needs at least one column"));
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Largest inscribed ball, via the LP oracle. Requires a bounded polytope.
    pub fn chebychev_ball(&self) -> Result<ChebychevBall, LpError> {
        lp::chebychev_ball(&self.a, &self.b)
    }

    /// Tightest `(entry, exit)` from slacks `b − A r` and rates `A v`.
    fn chord_from(&self, ar: &DVector<f64>, av: impl Iterator<Item = f64>) -> Chord {
        let mut entry = f64::NEG_INFINITY;
        let mut exit = f64::INFINITY;
        for ((bi, ari), avi) in self.b.iter().zip(ar.iter()).zip(av) {
            if avi.abs() <= PARALLEL_EPS {
                continue;
            }
            let t = (bi - ari) / avi;
            if avi > 0.0 {
                exit = exit.min(t);
            } else {
                entry = entry.max(t);
            }
        }
        Chord { entry, exit }
    }
}

impl Body for HPolytope {
    fn dimension(&self) -> usize {
        self.a.ncols()
    }

    fn num_of_hyperplanes(&self) -> usize {
        self.a.nrows()
    }

    fn is_in(&self, p: &Point) -> bool {
        (&self.a * p)
            .iter()
            .zip(self.b.iter())
            .all(|(lhs, rhs)| *lhs <= rhs + FEAS_EPS)
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        let ar = &self.a * r;
        let av = &self.a * v;
        self.chord_from(&ar, av.iter().copied())
    }

    fn line_intersect_cached(
        &self,
        r: &Point,
        v: &Point,
        cache: &mut RayCache,
        last_step: f64,
    ) -> Chord {
        debug_assert_eq!(cache.rows(), self.num_of_hyperplanes());
        if cache.primed {
            // r = r_prev + last_step · v_prev
            cache.ar.axpy(last_step, &cache.av, 1.0);
        } else {
            cache.ar.gemv(1.0, &self.a, r, 0.0);
        }
        cache.av.gemv(1.0, &self.a, v, 0.0);
        cache.primed = true;
        self.chord_from(&cache.ar, cache.av.iter().copied())
    }

    fn line_intersect_coord(
        &self,
        r: &Point,
        axis: usize,
        cache: &mut CoordCache,
        init: bool,
    ) -> Chord {
        debug_assert_eq!(cache.rows(), self.num_of_hyperplanes());
        match cache.last {
            Some((prev_axis, prev_value)) if !init => {
                let delta = r[prev_axis] - prev_value;
                cache.ar.axpy(delta, &self.a.column(prev_axis), 1.0);
            }
            _ => cache.ar.gemv(1.0, &self.a, r, 0.0),
        }
        cache.last = Some((axis, r[axis]));
        self.chord_from(&cache.ar, self.a.column(axis).iter().copied())
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        let ar = &self.a * r;
        self.chord_from(&ar, self.a.column(axis).iter().copied())
    }
}
