//! Vertex-represented polytopes and zonotopes; every query goes through the LP oracle.
//!
//! Both bodies expose no facets, so walk caches are empty for them. A failed
//! ray-shooting LP degrades the chord to zero length at the query point (the
//! walk stays put for that step) and logs a warning.

use nalgebra::DMatrix;

use super::{Body, BodyError, Chord};
use crate::lp::{self, Sense};
use crate::Point;

/// Convex hull of the rows of `vertices` (`n × d`).
#[derive(Clone, Debug)]
pub struct VPolytope {
    vertices: DMatrix<f64>,
}

impl VPolytope {
    pub fn new(vertices: DMatrix<f64>) -> Result<Self, BodyError> {
        check_rows(&vertices, "vertex")?;
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &DMatrix<f64> {
        &self.vertices
    }
}

/// Minkowski sum of the segments `[0, G_i]` over the rows of `generators`.
#[derive(Clone, Debug)]
pub struct Zonotope {
    generators: DMatrix<f64>,
}

impl Zonotope {
    pub fn new(generators: DMatrix<f64>) -> Result<Self, BodyError> {
        check_rows(&generators, "generator")?;
        Ok(Self { generators })
    }

    #[inline]
    pub fn generators(&self) -> &DMatrix<f64> {
        &self.generators
    }
}

fn check_rows(m: &DMatrix<f64>, what: &str) -> Result<(), BodyError> {
    if m.nrows() == 0 || m.ncols() == 0 {
        return Err(BodyError::invalid(format!(
            "need at least one {what} in at least one dimension"
        )));
    }
    if m.iter().any(|x| !x.is_finite()) {
        return Err(BodyError::invalid(format!("{what} coordinates must be finite")));
    }
    Ok(())
}

/// Chord from one minimizing and one maximizing ray-shooting LP.
fn shoot_chord(m: &DMatrix<f64>, r: &Point, v: &Point, zonotope: bool) -> Chord {
    let entry = lp::ray_shoot(m, r, v, Sense::Minimize, zonotope);
    let exit = lp::ray_shoot(m, r, v, Sense::Maximize, zonotope);
    match (entry, exit) {
        (Ok(entry), Ok(exit)) => Chord::new(entry, exit),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(%err, zonotope, "ray shooting failed; using zero-length chord");
            Chord::degenerate()
        }
    }
}

fn axis_direction(dim: usize, axis: usize) -> Point {
    let mut e = Point::zeros(dim);
    e[axis] = 1.0;
    e
}

impl Body for VPolytope {
    fn dimension(&self) -> usize {
        self.vertices.ncols()
    }

    fn num_of_hyperplanes(&self) -> usize {
        0
    }

    fn is_in(&self, p: &Point) -> bool {
        lp::member_vpoly(&self.vertices, p)
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        shoot_chord(&self.vertices, r, v, false)
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        let e = axis_direction(self.dimension(), axis);
        shoot_chord(&self.vertices, r, &e, false)
    }
}

impl Body for Zonotope {
    fn dimension(&self) -> usize {
        self.generators.ncols()
    }

    fn num_of_hyperplanes(&self) -> usize {
        0
    }

    fn is_in(&self, p: &Point) -> bool {
        lp::member_zonotope(&self.generators, p)
    }

    fn line_intersect(&self, r: &Point, v: &Point) -> Chord {
        shoot_chord(&self.generators, r, v, true)
    }

    fn query_dual(&self, r: &Point, axis: usize) -> Chord {
        let e = axis_direction(self.dimension(), axis);
        shoot_chord(&self.generators, r, &e, true)
    }
}
