//! Walk-owned caches of partial dot products against a facet matrix.
//!
//! Both caches are sized to `num_of_hyperplanes()` of the body they are used
//! with. A freshly built cache is unprimed; the first query fills it.

use nalgebra::DVector;

/// Cache for random-direction chords: `A·r` at the current point and `A·v`
/// for the last direction.
#[derive(Clone, Debug)]
pub struct RayCache {
    pub(crate) ar: DVector<f64>,
    pub(crate) av: DVector<f64>,
    pub(crate) primed: bool,
}

impl RayCache {
    pub fn new(rows: usize) -> Self {
        Self {
            ar: DVector::zeros(rows),
            av: DVector::zeros(rows),
            primed: false,
        }
    }

    /// Drop cached products; the next query recomputes them.
    pub fn reset(&mut self) {
        self.ar.fill(0.0);
        self.av.fill(0.0);
        self.primed = false;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.ar.len()
    }

    #[inline]
    pub fn is_primed(&self) -> bool {
        self.primed
    }
}

/// Cache for coordinate chords: `A·r` plus the axis and coordinate value of
/// the last queried point, so a move along that axis updates `A·r` by one
/// column.
#[derive(Clone, Debug)]
pub struct CoordCache {
    pub(crate) ar: DVector<f64>,
    pub(crate) last: Option<(usize, f64)>,
}

impl CoordCache {
    pub fn new(rows: usize) -> Self {
        Self {
            ar: DVector::zeros(rows),
            last: None,
        }
    }

    pub fn reset(&mut self) {
        self.ar.fill(0.0);
        self.last = None;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.ar.len()
    }

    #[inline]
    pub fn is_primed(&self) -> bool {
        self.last.is_some()
    }
}
