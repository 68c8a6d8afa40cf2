//! Hit-and-run random walks over any `Body`.
//!
//! Purpose
//! - MCMC samplers whose stationary distribution is uniform on a full
//!   dimensional convex body: draw a direction, take the chord through the
//!   current point, jump to a uniform point on it.
//! - `BoundaryRdhrWalk` draws uniform directions on the sphere and also reports
//!   the chord endpoints of its last sub-step (boundary samples).
//!   `CoordinateHitAndRun` moves along random coordinate axes and amortizes
//!   each chord query to one column update of `A·r`.
//!
//! State model
//! - One steady state “positioned at the current point”, entered by `new`,
//!   re-entered after every sub-step; the caller controls how many steps run.
//! - Caches and the last step length live in the walk, so bodies stay shared
//!   and read-only. `reinitialize` is the only reset.
//!
//! Preconditions (not checked)
//! - The start point is inside the body; the body is convex, bounded and full
//!   dimensional. A zero-length chord is fine: the step is then deterministic.

mod brdhr;
mod cdhr;
mod direction;
pub mod sampling;

pub use brdhr::BoundaryRdhrWalk;
pub use cdhr::CoordinateHitAndRun;
pub use direction::{sample_axis, sample_direction};

use rand::Rng;

use crate::body::Body;
use crate::Point;

/// Chord endpoints of the last sub-step of a walk.
#[derive(Clone, Debug)]
pub struct BoundaryPair {
    pub entry: Point,
    pub exit: Point,
}

/// Common protocol of the hit-and-run family.
pub trait RandomWalk {
    /// Position the walk with one step from `start` (which must lie in `body`).
    fn new<B, R>(body: &B, start: &Point, rng: &mut R) -> Self
    where
        Self: Sized,
        B: Body + ?Sized,
        R: Rng + ?Sized;

    /// Current interior sample.
    fn current(&self) -> &Point;

    /// Advance `walk_length` sub-steps. Returns the last sub-step's chord
    /// endpoints, or `None` if `walk_length == 0`.
    fn apply<B, R>(&mut self, body: &B, walk_length: u32, rng: &mut R) -> Option<BoundaryPair>
    where
        B: Body + ?Sized,
        R: Rng + ?Sized;
}
