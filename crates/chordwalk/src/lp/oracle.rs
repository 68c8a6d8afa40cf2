//! Geometric queries expressed as linear programs.
//!
//! Matrix conventions: a V-polytope or zonotope is a matrix whose rows are
//! vertices or generators (`n × d`); an H-polytope is `A x <= b` with `A`
//! of shape `m × d`.

use nalgebra::{DMatrix, DVector};

use super::{LpError, LpModel, Relation, Sense, INFINITY};
use crate::Point;

/// Largest ball inscribed in an H-polytope.
#[derive(Clone, Debug)]
pub struct ChebychevBall {
    pub center: Point,
    pub radius: f64,
}

/// Chebychev ball of `{x : A x <= b}`.
///
/// LP over `(x_1..x_d, r)`: maximize `r` subject to
/// `A_i·x + ‖A_i‖·r <= b_i`, `x` free, `r >= 0`.
///
/// The polytope must be bounded. With a recession direction the optimal
/// centers form an unbounded set and the solver may report
/// `LpError::Unbounded` even though the inradius is finite (e.g. the slab
/// `|x_1| <= 1` in R^2).
pub fn chebychev_ball(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<ChebychevBall, LpError> {
    let (m, d) = a.shape();
    if b.len() != m {
        return Err(LpError::InvalidModel {
            reason: format!("A has {m} rows, b has {}", b.len()),
        });
    }
    let mut lp = LpModel::new(m, d + 1);
    let mut row = vec![0.0; d + 1];
    for i in 0..m {
        let a_i = a.row(i);
        for (slot, aij) in row.iter_mut().zip(a_i.iter()) {
            *slot = *aij;
        }
        row[d] = a_i.norm();
        lp.add_row(&row, Relation::Le, b[i])?;
    }
    for j in 0..d {
        lp.set_bounds(j, -INFINITY, INFINITY)?;
    }
    lp.set_bounds(d, 0.0, INFINITY)?;
    let mut objective = vec![0.0; d + 1];
    objective[d] = 1.0;
    lp.set_objective(&objective, Sense::Maximize)?;

    let sol = lp.solve().map_err(|err| {
        tracing::debug!(%err, rows = m, dim = d, "chebychev ball unavailable");
        err
    })?;
    let center = Point::from_column_slice(&sol.values()[..d]);
    Ok(ChebychevBall {
        center,
        radius: sol.objective(),
    })
}

/// Is `q` in the convex hull of the rows of `v`?
///
/// Feasibility LP over `λ`: `Σ λ_j V_j = q`, `Σ λ_j = 1`, `0 <= λ_j <= 1`.
/// Vertices and boundary points are inside. Solver failure counts as outside.
pub fn member_vpoly(v: &DMatrix<f64>, q: &Point) -> bool {
    let (n, d) = v.shape();
    if q.len() != d {
        return false;
    }
    let mut lp = LpModel::new(d + 1, n);
    let built = (0..d)
        .try_for_each(|i| {
            let coeffs: Vec<f64> = v.column(i).iter().copied().collect();
            lp.add_row(&coeffs, Relation::Eq, q[i])
        })
        .and_then(|_| lp.add_row(&vec![1.0; n], Relation::Eq, 1.0))
        .and_then(|_| (0..n).try_for_each(|j| lp.set_bounds(j, 0.0, 1.0)));
    if built.is_err() {
        return false;
    }
    match lp.solve() {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(%err, "v-polytope membership lp failed");
            false
        }
    }
}

/// Is `q = Σ x_i G_i` for some `x ∈ [0,1]^n`, `G_i` the rows of `g`?
pub fn member_zonotope(g: &DMatrix<f64>, q: &Point) -> bool {
    let (n, d) = g.shape();
    if q.len() != d {
        return false;
    }
    let mut lp = LpModel::new(d, n);
    let built = (0..d)
        .try_for_each(|i| {
            let coeffs: Vec<f64> = g.column(i).iter().copied().collect();
            lp.add_row(&coeffs, Relation::Eq, q[i])
        })
        .and_then(|_| (0..n).try_for_each(|j| lp.set_bounds(j, 0.0, 1.0)));
    if built.is_err() {
        return false;
    }
    match lp.solve() {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(%err, "zonotope membership lp failed");
            false
        }
    }
}

/// Extreme `t` such that `p + t·dir` is a combination of the rows of `v`.
///
/// LP over `(λ_1..λ_n, t)`: `Σ λ_j V_j − t·dir = p`, `0 <= λ_j <= 1`, `t`
/// free, plus `Σ λ_j = 1` unless `zonotope`. `Sense::Maximize` returns the
/// exit parameter, `Sense::Minimize` the entry parameter.
pub fn ray_shoot(
    v: &DMatrix<f64>,
    p: &Point,
    dir: &Point,
    sense: Sense,
    zonotope: bool,
) -> Result<f64, LpError> {
    let (n, d) = v.shape();
    if p.len() != d || dir.len() != d {
        return Err(LpError::InvalidModel {
            reason: format!("ray lives in R^{}, body in R^{d}", p.len()),
        });
    }
    let rows = if zonotope { d } else { d + 1 };
    let mut lp = LpModel::new(rows, n + 1);
    let mut row = vec![0.0; n + 1];
    for i in 0..d {
        for (slot, vji) in row.iter_mut().zip(v.column(i).iter()) {
            *slot = *vji;
        }
        row[n] = -dir[i];
        lp.add_row(&row, Relation::Eq, p[i])?;
    }
    if !zonotope {
        row.fill(1.0);
        row[n] = 0.0;
        lp.add_row(&row, Relation::Eq, 1.0)?;
    }
    for j in 0..n {
        lp.set_bounds(j, 0.0, 1.0)?;
    }
    lp.set_bounds(n, -INFINITY, INFINITY)?;
    let mut objective = vec![0.0; n + 1];
    objective[n] = 1.0;
    lp.set_objective(&objective, sense)?;

    let sol = lp.solve()?;
    Ok(sol.values()[n])
}
