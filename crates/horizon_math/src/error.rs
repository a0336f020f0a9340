//! Error types for numeric primitives.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from polynomial evaluation or interpolation-table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathError {
    /// Polynomial evaluation was given an empty coefficient list.
    EmptyCoefficients,
    /// Interpolation table requires exactly three samples.
    SampleCount,
    /// Interpolation table endpoints coincide (`x1 == x3`).
    DegenerateRange,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCoefficients => write!(f, "coefficient list must not be empty"),
            Self::SampleCount => write!(f, "interpolation table requires exactly 3 samples"),
            Self::DegenerateRange => write!(f, "interpolation endpoints must differ"),
        }
    }
}

impl Error for MathError {}
