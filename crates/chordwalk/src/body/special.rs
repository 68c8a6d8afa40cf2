//! Special bodies used in tests, benches and demos.
//!
//! Purpose
//! - Canonical H/V-representations for common families in any dimension:
//!   hypercubes, cross polytopes (ℓ1 balls), standard simplices, and the unit
//!   cube as a zonotope.
//! - Constructors are small and explicit so tests can rely on them deterministically.
//!   They only fail for `dim == 0`.
//!
//! References
//! - Volume formulas:
//!   - Hypercube [-a,a]^d: vol = (2a)^d.
//!   - Cross polytope {‖x‖₁ <= r}: vol = 2^d r^d / d!.
//!   - Standard simplex {x >= 0, Σx <= 1}: vol = 1 / d!.

use nalgebra::{DMatrix, DVector};

use super::{BodyError, HPolytope, VPolytope, Zonotope};

/// Axis-aligned hypercube [-a,a]^d.
pub fn hypercube(dim: usize, a: f64) -> Result<HPolytope, BodyError> {
    let mut rows = DMatrix::zeros(2 * dim, dim);
    for i in 0..dim {
        rows[(2 * i, i)] = 1.0;
        rows[(2 * i + 1, i)] = -1.0;
    }
    HPolytope::new(rows, DVector::from_element(2 * dim, a))
}

/// Unit cube [0,1]^d.
pub fn unit_cube(dim: usize) -> Result<HPolytope, BodyError> {
    let mut rows = DMatrix::zeros(2 * dim, dim);
    let mut b = DVector::zeros(2 * dim);
    for i in 0..dim {
        rows[(2 * i, i)] = 1.0;
        b[2 * i] = 1.0;
        rows[(2 * i + 1, i)] = -1.0;
    }
    HPolytope::new(rows, b)
}

/// Cross polytope (ℓ1 ball): {x : Σ|x_i| <= r}, one facet per sign pattern.
pub fn cross_polytope(dim: usize, r: f64) -> Result<HPolytope, BodyError> {
    let m = 1usize << dim;
    let mut rows = DMatrix::zeros(m, dim);
    for k in 0..m {
        for i in 0..dim {
            rows[(k, i)] = if (k >> i) & 1 == 1 { -1.0 } else { 1.0 };
        }
    }
    HPolytope::new(rows, DVector::from_element(m, r))
}

/// Standard simplex {x >= 0, Σx <= 1} in H-representation.
pub fn simplex(dim: usize) -> Result<HPolytope, BodyError> {
    let mut rows = DMatrix::zeros(dim + 1, dim);
    let mut b = DVector::zeros(dim + 1);
    for i in 0..dim {
        rows[(i, i)] = -1.0;
        rows[(dim, i)] = 1.0;
    }
    b[dim] = 1.0;
    HPolytope::new(rows, b)
}

/// Standard simplex by its `d + 1` vertices (origin and unit vectors).
pub fn simplex_vertices(dim: usize) -> Result<VPolytope, BodyError> {
    let mut verts = DMatrix::zeros(dim + 1, dim);
    for i in 0..dim {
        verts[(i + 1, i)] = 1.0;
    }
    VPolytope::new(verts)
}

/// Unit cube [0,1]^d as the zonotope of the standard basis.
pub fn cube_zonotope(dim: usize) -> Result<Zonotope, BodyError> {
    Zonotope::new(DMatrix::identity(dim, dim))
}
