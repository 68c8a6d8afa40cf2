use std::fmt;

/// Errors raised while constructing a body from external data.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// Two inputs disagree on the ambient dimension or row count.
    DimensionMismatch { expected: usize, got: usize },
    /// A parameter violates the body's invariant (negative radius, non-PD matrix, ...).
    InvalidParam { reason: String },
}

impl BodyError {
    pub(crate) fn mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::InvalidParam { reason } => write!(f, "invalid body parameter: {reason}"),
        }
    }
}

impl std::error::Error for BodyError {}
