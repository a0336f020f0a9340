//! Error types for coordinate construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from coordinate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// A coordinate component was NaN.
    NanCoordinate(&'static str),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NanCoordinate(which) => write!(f, "coordinate component is NaN: {which}"),
        }
    }
}

impl Error for FrameError {}
