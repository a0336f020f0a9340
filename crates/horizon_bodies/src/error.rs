//! Error types for body-position evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from periodic-series evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BodyError {
    /// A periodic-series row carries a multiplier outside the supported
    /// set. The constant tables are corrupted; not recoverable.
    DataTable(&'static str),
}

impl Display for BodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataTable(msg) => write!(f, "periodic-series table error: {msg}"),
        }
    }
}

impl Error for BodyError {}
