//! Convex-body oracles and hit-and-run walks.
//!
//! Layout
//! - `body`: the `Body` oracle trait and its variants (ball, H/V-polytope,
//!   zonotope, ellipsoid) plus walk-owned caches.
//! - `intersect`: `Intersection<P, Q>`, the composite body behind the same trait.
//! - `lp`: LP-backed oracle queries (membership, ray shooting, Chebychev ball).
//! - `walk`: the hit-and-run family and sampling drivers.
//!
//! Everything works on `Point = DVector<f64>`. Bodies are immutable after
//! construction and can be shared across threads; walks are single-chain,
//! single-thread objects.

mod cfg;

pub mod body;
pub mod intersect;
pub mod lp;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point or direction in R^d.
pub type Point = nalgebra::DVector<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::body::{
        special, Ball, Body, BodyError, Chord, CoordCache, Ellipsoid, HPolytope, RayCache,
        VPolytope, Zonotope,
    };
    pub use crate::intersect::{
        BallPolytope, BallPolytopeEllipsoid, Intersection, PolytopeEllipsoid,
    };
    pub use crate::lp::{ChebychevBall, LpError};
    pub use crate::walk::sampling::{boundary_points, uniform_points, SamplerCfg, SamplerError};
    pub use crate::walk::{BoundaryPair, BoundaryRdhrWalk, CoordinateHitAndRun, RandomWalk};
    pub use crate::Point;
}
