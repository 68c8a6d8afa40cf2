//! Euclidean ball `{x : ‖x − c‖² <= R}` stored by its squared radius.

use super::{Body, BodyError, Chord};
use crate::Point;

/// Closed ball with center `c` and squared radius `R`.
///
/// Invariants:
/// - `R >= 0` and finite, dimension >= 1 (checked by `new`).
#[derive(Clone, Debug)]
pub struct Ball {
    center: Point,
    squared_radius: f64,
}

impl Ball {
    pub fn new(center: Point, squared_radius: f64) -> Result<Self, BodyError> {
        if center.is_empty() {
            return Err(BodyError::invalid("ball needs at least one dimension"));
        }
        if !squared_radius.is_finite() || squared_radius < 0.0 {
            return Err(BodyError::invalid(
                "squared radius must be finite and non-negative",
            ));
        }
        Ok(Self {
            center,
            squared_radius,
        })
    }

    /// Ball of radius `radius` around the origin of R^d.
    pub fn centered(dim: usize, radius: f64) -> Result<Self, BodyError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(BodyError::invalid("radius must be finite and non-negative"));
        }
        Self::new(Point::zeros(dim), radius * radius)
    }

    #[inline]
    pub fn center(&self) -> &Point {
        &self.center
    }

    #[inline]
    pub fn squared_radius(&self) -> f64 {
        self.squared_radius
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.squared_radius.sqrt()
    }

    /// Roots of `a t² + 2 b t + c = 0` for `a = v·v`, `b = v·(r−c)`,
    /// `c = ‖r−c‖² − R`.
    fn roots(&self, vrc: f64, v2: f64, rc2: f64) -> Chord {
        let disc = vrc * vrc - v2 * (rc2 - self.squared_radius);
        debug_assert!(disc >= 0.0, "line misses the ball (disc = {disc})");
        let disc_sqrt = disc.sqrt();
        Chord {
            entry: (-vrc - disc_sqrt) / v2,
            exit: (-vrc + disc_sqrt) / v2,
        }
    }
}

impl Body for Ball {
    fn dimension(&self) -> usize {
        self.center.len()
    }

    fn num_of_hyperplanes(&self) -> usize {
        0
    }

    fn is_in(&self, p: &Point) -> bool {
        (p - &self.center).norm_squared() <= self.squared_radius
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        let rc = r - &self.center;
        self.roots(v.dot(&rc), v.norm_squared(), rc.norm_squared())
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        let rc = r - &self.center;
        self.roots(rc[axis], 1.0, rc.norm_squared())
    }
}
