//! LP oracle: one fresh linear program per geometric query.
//!
//! Purpose
//! - Answer the queries that have no closed form: membership in a V-polytope
//!   or zonotope, ray shooting against them, and the Chebychev ball of an
//!   H-polytope.
//!
//! Why this design
//! - `LpModel` mirrors the row-oriented interface of classic LP libraries
//!   (size, add rows with a relation, column bounds, objective + sense, solve,
//!   read objective and columns). It only buffers the model; the solver
//!   instance is created inside `solve` and dropped on every exit path. No
//!   state is shared between queries.
//! - The solver is `minilp` (pure Rust, no global state); concurrent queries
//!   from independent threads are safe.
//! - Failures are typed (`LpError`). A reported optimum with a non-finite
//!   objective or column value is `LpError::Numerical`. Oracle wrappers degrade them to the
//!   documented results: membership → `false`, chords → zero-length.
//!
//! Conventions
//! - Columns default to bounds `[0, INFINITY)`, as in row-oriented LP libraries.
//! - `INFINITY` is the unbounded sentinel for bounds.

mod oracle;

pub use oracle::{chebychev_ball, member_vpoly, member_zonotope, ray_shoot, ChebychevBall};

use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use std::fmt;

/// Unbounded-variable sentinel accepted by `LpModel::set_bounds`.
pub const INFINITY: f64 = f64::INFINITY;

/// Relation of a constraint row to its right-hand side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Le,
    Eq,
    Ge,
}

impl Relation {
    fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Relation::Le => lhs <= rhs,
            Relation::Eq => lhs == rhs,
            Relation::Ge => lhs >= rhs,
        }
    }
}

impl From<Relation> for ComparisonOp {
    fn from(rel: Relation) -> Self {
        match rel {
            Relation::Le => ComparisonOp::Le,
            Relation::Eq => ComparisonOp::Eq,
            Relation::Ge => ComparisonOp::Ge,
        }
    }
}

/// Optimization direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl From<Sense> for OptimizationDirection {
    fn from(sense: Sense) -> Self {
        match sense {
            Sense::Maximize => OptimizationDirection::Maximize,
            Sense::Minimize => OptimizationDirection::Minimize,
        }
    }
}

/// Errors surfaced by `LpModel::solve` and the oracle queries built on it.
#[derive(Debug, Clone, PartialEq)]
pub enum LpError {
    Infeasible,
    Unbounded,
    /// The solver reported success but its objective or a column value is not finite.
    Numerical,
    /// The model was built inconsistently (bad column index, row length, bounds).
    InvalidModel { reason: String },
}

impl LpError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidModel {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible => write!(f, "linear program is infeasible"),
            Self::Unbounded => write!(f, "linear program is unbounded"),
            Self::Numerical => write!(f, "linear program solution is not finite"),
            Self::InvalidModel { reason } => write!(f, "invalid linear program: {reason}"),
        }
    }
}

impl std::error::Error for LpError {}

impl From<minilp::Error> for LpError {
    fn from(err: minilp::Error) -> Self {
        match err {
            minilp::Error::Infeasible => LpError::Infeasible,
            minilp::Error::Unbounded => LpError::Unbounded,
        }
    }
}

#[derive(Clone, Debug)]
struct Row {
    coeffs: Vec<f64>,
    rel: Relation,
    rhs: f64,
}

/// Buffered linear program over `cols` columns.
#[derive(Clone, Debug)]
pub struct LpModel {
    bounds: Vec<(f64, f64)>,
    objective: Vec<f64>,
    sense: Sense,
    rows: Vec<Row>,
}

impl LpModel {
    /// Model with room for `rows` constraints and `cols` columns, zero
    /// objective (maximize) and default bounds.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bounds: vec![(0.0, INFINITY); cols],
            objective: vec![0.0; cols],
            sense: Sense::Maximize,
            rows: Vec::with_capacity(rows),
        }
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Append `coeffs · x  rel  rhs`; `coeffs` must cover every column.
    pub fn add_row(&mut self, coeffs: &[f64], rel: Relation, rhs: f64) -> Result<(), LpError> {
        if coeffs.len() != self.num_cols() {
            return Err(LpError::invalid(format!(
                "row has {} coefficients, model has {} columns",
                coeffs.len(),
                self.num_cols()
            )));
        }
        if !rhs.is_finite() || coeffs.iter().any(|c| !c.is_finite()) {
            return Err(LpError::invalid("row data must be finite"));
        }
        self.rows.push(Row {
            coeffs: coeffs.to_vec(),
            rel,
            rhs,
        });
        Ok(())
    }

    pub fn set_bounds(&mut self, col: usize, lo: f64, hi: f64) -> Result<(), LpError> {
        if col >= self.num_cols() {
            return Err(LpError::invalid(format!("column {col} out of range")));
        }
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(LpError::invalid(format!(
                "bounds [{lo}, {hi}] on column {col} are empty"
            )));
        }
        self.bounds[col] = (lo, hi);
        Ok(())
    }

    pub fn set_objective(&mut self, coeffs: &[f64], sense: Sense) -> Result<(), LpError> {
        if coeffs.len() != self.num_cols() {
            return Err(LpError::invalid(format!(
                "objective has {} coefficients, model has {} columns",
                coeffs.len(),
                self.num_cols()
            )));
        }
        self.objective.copy_from_slice(coeffs);
        self.sense = sense;
        Ok(())
    }

    /// Solve with a fresh solver instance.
    pub fn solve(&self) -> Result<LpSolution, LpError> {
        let mut problem = Problem::new(self.sense.into());
        let vars: Vec<_> = self
            .objective
            .iter()
            .zip(&self.bounds)
            .map(|(&c, &bounds)| problem.add_var(c, bounds))
            .collect();
        for row in &self.rows {
            let mut expr = LinearExpr::empty();
            let mut terms = 0usize;
            for (var, &c) in vars.iter().zip(&row.coeffs) {
                if c != 0.0 {
                    expr.add(*var, c);
                    terms += 1;
                }
            }
            if terms == 0 {
                // 0 rel rhs: either vacuous or contradictory.
                if row.rel.holds(0.0, row.rhs) {
                    continue;
                }
                return Err(LpError::Infeasible);
            }
            problem.add_constraint(expr, row.rel.into(), row.rhs);
        }
        tracing::trace!(rows = self.num_rows(), cols = self.num_cols(), "lp solve");
        let solution = problem.solve()?;
        LpSolution::checked(
            solution.objective(),
            vars.iter().map(|v| solution[*v]).collect(),
        )
    }
}

/// Optimal objective value and column assignment.
#[derive(Clone, Debug)]
pub struct LpSolution {
    objective: f64,
    values: Vec<f64>,
}

impl LpSolution {
    /// Accept a solver result only if every number in it is finite.
    fn checked(objective: f64, values: Vec<f64>) -> Result<Self, LpError> {
        if !objective.is_finite() || values.iter().any(|x| !x.is_finite()) {
            tracing::debug!(objective, "lp solution rejected as non-finite");
            return Err(LpError::Numerical);
        }
        Ok(Self { objective, values })
    }

    #[inline]
    pub fn objective(&self) -> f64 {
        self.objective
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
