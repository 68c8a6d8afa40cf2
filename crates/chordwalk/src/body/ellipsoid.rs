//! Ellipsoid `{x : (x − c)ᵀ Q (x − c) <= 1}` with `Q` symmetric positive definite.

use nalgebra::{Cholesky, DMatrix};

use super::{Body, BodyError, Chord};
use crate::Point;

#[derive(Clone, Debug)]
pub struct Ellipsoid {
    center: Point,
    q: DMatrix<f64>,
}

impl Ellipsoid {
    /// Build from center and shape matrix; rejects non-square, asymmetric or
    /// non positive-definite `q`.
    pub fn new(center: Point, q: DMatrix<f64>) -> Result<Self, BodyError> {
        let d = center.len();
        if d == 0 {
            return Err(BodyError::invalid("ellipsoid needs at least one dimension"));
        }
        if q.nrows() != d {
            return Err(BodyError::mismatch(d, q.nrows()));
        }
        if q.ncols() != d {
            return Err(BodyError::mismatch(d, q.ncols()));
        }
        let scale = q.amax().max(1.0);
        if (&q - q.transpose()).amax() > 1e-12 * scale {
            return Err(BodyError::invalid("shape matrix must be symmetric"));
        }
        if Cholesky::new(q.clone()).is_none() {
            return Err(BodyError::invalid("shape matrix must be positive definite"));
        }
        Ok(Self { center, q })
    }

    /// Axis-aligned ellipsoid with the given semi-axis lengths.
    pub fn from_semi_axes(center: Point, semi_axes: &[f64]) -> Result<Self, BodyError> {
        if semi_axes.len() != center.len() {
            return Err(BodyError::mismatch(center.len(), semi_axes.len()));
        }
        if semi_axes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(BodyError::invalid("semi-axes must be finite and positive"));
        }
        let diag = Point::from_iterator(semi_axes.len(), semi_axes.iter().map(|s| 1.0 / (s * s)));
        Self::new(center, DMatrix::from_diagonal(&diag))
    }

    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    #[inline]
    pub fn shape(&self) -> &DMatrix<f64> {
        &self.q
    }

    /// Roots of `a t² + 2 b t + c = 0`; same precondition as the ball.
    fn roots(a: f64, b: f64, c: f64) -> Chord {
        let disc = b * b - a * c;
        debug_assert!(disc >= 0.0, "line misses the ellipsoid (disc = {disc})");
        let disc_sqrt = disc.sqrt();
        Chord {
            entry: (-b - disc_sqrt) / a,
            exit: (-b + disc_sqrt) / a,
        }
    }
}

impl Body for Ellipsoid {
    fn dimension(&self) -> usize {
        self.center.len()
    }

    fn num_of_hyperplanes(&self) -> usize {
        0
    }

    fn is_in(&self, p: &Point) -> bool {
        let pc = p - &self.center;
        pc.dot(&(&self.q * &pc)) <= 1.0
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        let rc = r - &self.center;
        let qv = &self.q * v;
        Self::roots(v.dot(&qv), qv.dot(&rc), rc.dot(&(&self.q * &rc)) - 1.0)
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        let rc = r - &self.center;
        let qrc = &self.q * &rc;
        Self::roots(self.q[(axis, axis)], qrc[axis], rc.dot(&qrc) - 1.0)
    }
}
