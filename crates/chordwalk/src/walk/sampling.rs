//! Sampling drivers: run one walk chain and collect its output.
//!
//! The drivers own nothing beyond the chain; parallel sampling means one
//! driver call per thread with a private rng and a shared `&Body`.

use rand::Rng;
use std::fmt;

use super::RandomWalk;
use crate::body::Body;
use crate::Point;

/// Chain configuration.
#[derive(Clone, Copy, Debug)]
pub struct SamplerCfg {
    /// Sub-steps between two recorded samples (thinning).
    pub walk_length: u32,
    /// Sub-steps discarded after initialization.
    pub burn_in: u32,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            walk_length: 10,
            burn_in: 0,
        }
    }
}

impl SamplerCfg {
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.walk_length == 0 {
            return Err(SamplerError::invalid("walk_length must be > 0"));
        }
        Ok(())
    }
}

/// Errors raised before a chain starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    InvalidCfg { reason: String },
    /// The start point fails the body's membership oracle.
    StartOutside,
    DimensionMismatch { body: usize, start: usize },
}

impl SamplerError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCfg {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCfg { reason } => write!(f, "invalid sampler config: {reason}"),
            Self::StartOutside => write!(f, "start point lies outside the body"),
            Self::DimensionMismatch { body, start } => write!(
                f,
                "start point has dimension {start}, body has dimension {body}"
            ),
        }
    }
}

impl std::error::Error for SamplerError {}

fn start_chain<W, B, R>(
    body: &B,
    start: &Point,
    cfg: &SamplerCfg,
    rng: &mut R,
) -> Result<W, SamplerError>
where
    W: RandomWalk,
    B: Body + ?Sized,
    R: Rng + ?Sized,
{
    cfg.validate()?;
    if start.len() != body.dimension() {
        return Err(SamplerError::DimensionMismatch {
            body: body.dimension(),
            start: start.len(),
        });
    }
    if !body.is_in(start) {
        return Err(SamplerError::StartOutside);
    }
    let mut walk = W::new(body, start, rng);
    if cfg.burn_in > 0 {
        walk.apply(body, cfg.burn_in, rng);
    }
    Ok(walk)
}

/// `n` approximately uniform interior points, `cfg.walk_length` sub-steps apart.
pub fn uniform_points<W, B, R>(
    body: &B,
    start: &Point,
    n: usize,
    cfg: &SamplerCfg,
    rng: &mut R,
) -> Result<Vec<Point>, SamplerError>
where
    W: RandomWalk,
    B: Body + ?Sized,
    R: Rng + ?Sized,
{
    let mut walk: W = start_chain(body, start, cfg, rng)?;
    tracing::debug!(
        n,
        dim = body.dimension(),
        walk_length = cfg.walk_length,
        burn_in = cfg.burn_in,
        "uniform sampling"
    );
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        walk.apply(body, cfg.walk_length, rng);
        out.push(walk.current().clone());
    }
    Ok(out)
}

/// `2n` boundary points: both chord endpoints of the last sub-step of each of
/// `n` recorded walk segments.
pub fn boundary_points<W, B, R>(
    body: &B,
    start: &Point,
    n: usize,
    cfg: &SamplerCfg,
    rng: &mut R,
) -> Result<Vec<Point>, SamplerError>
where
    W: RandomWalk,
    B: Body + ?Sized,
    R: Rng + ?Sized,
{
    let mut walk: W = start_chain(body, start, cfg, rng)?;
    tracing::debug!(
        n,
        dim = body.dimension(),
        walk_length = cfg.walk_length,
        "boundary sampling"
    );
    let mut out = Vec::with_capacity(2 * n);
    for _ in 0..n {
        // walk_length > 0 was validated, so every segment yields a pair.
        if let Some(pair) = walk.apply(body, cfg.walk_length, rng) {
            out.push(pair.entry);
            out.push(pair.exit);
        }
    }
    Ok(out)
}
