//! Direction samplers for the walks.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::Point;

/// Uniform direction on the unit sphere S^{d-1}: a normalized standard
/// Gaussian vector (redrawn in the measure-zero case of a vanishing norm).
pub fn sample_direction<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Point {
    debug_assert!(dim > 0, "no directions in R^0");
    loop {
        let v = Point::from_fn(dim, |_, _| rng.sample::<f64, _>(StandardNormal));
        let norm = v.norm();
        if norm > 1e-12 {
            return v / norm;
        }
    }
}

/// Uniform coordinate axis in `0..dim`.
#[inline]
pub fn sample_axis<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> usize {
    debug_assert!(dim > 0, "no axes in R^0");
    rng.gen_range(0..dim)
}
