//! Unified error type for the facade API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use horizon_bodies::BodyError;
use horizon_events::SolveError;
use horizon_frames::FrameError;
use horizon_math::MathError;

/// Any error the high-level wrappers can surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum HorizonError {
    Math(MathError),
    Frame(FrameError),
    Body(BodyError),
    Solve(SolveError),
}

impl Display for HorizonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "{e}"),
            Self::Frame(e) => write!(f, "{e}"),
            Self::Body(e) => write!(f, "{e}"),
            Self::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl Error for HorizonError {}

impl From<MathError> for HorizonError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<FrameError> for HorizonError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}

impl From<BodyError> for HorizonError {
    fn from(e: BodyError) -> Self {
        Self::Body(e)
    }
}

impl From<SolveError> for HorizonError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}
