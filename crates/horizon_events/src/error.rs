//! Error types for the rise/transit/set solver.

use std::error::Error;
use std::fmt::{Display, Formatter};

use horizon_bodies::BodyError;
use horizon_math::MathError;

/// Errors from assembling or running the rise/set solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum SolveError {
    /// Interpolation-table construction failed.
    Math(MathError),
    /// Body-position evaluation failed.
    Body(BodyError),
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "interpolation error: {e}"),
            Self::Body(e) => write!(f, "body position error: {e}"),
        }
    }
}

impl Error for SolveError {}

impl From<MathError> for SolveError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<BodyError> for SolveError {
    fn from(e: BodyError) -> Self {
        Self::Body(e)
    }
}
