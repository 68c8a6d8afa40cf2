//! Tolerances for the body oracles (internal).
//!
//! Policy
//! - Polyhedral membership carries a small slack so that points produced by a
//!   chord step onto a facet still count as inside. Ball and ellipsoid
//!   membership compare exactly; LP-backed membership relies on the solver's
//!   own feasibility tolerance.

/// Feasibility epsilon used by `HPolytope::is_in` (`A x <= b + FEAS_EPS`).
pub(crate) const FEAS_EPS: f64 = 1e-9;
/// Rows with `|a·v|` below this are treated as parallel to the ray.
pub(crate) const PARALLEL_EPS: f64 = 1e-14;
