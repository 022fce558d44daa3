//! Error types for the engraving core
//!
//! Geometry errors are recoverable: the offending input contributes nothing.
//! Breaking errors tell the caller that a query has no feasible layout.

use thiserror::Error;

use crate::geometry::{Axis, Direction};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("NaN coordinate on the {0:?} axis")]
    NanCoordinate(Axis),

    #[error("Skyline direction mismatch: {left:?} vs {right:?}")]
    DirectionMismatch { left: Direction, right: Direction },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakingError {
    #[error("No feasible line breaking from start {start} to end {end} with {systems} systems")]
    NoSolution {
        start: usize,
        end: usize,
        systems: usize,
    },

    #[error("No feasible line breaking from start {start} to end {end}")]
    Infeasible { start: usize, end: usize },

    #[error("Unknown starting column index {0}")]
    UnknownStart(usize),

    #[error("Empty breaking range: start {start}, end {end}")]
    EmptyRange { start: usize, end: usize },

    #[error("System count must be at least 1")]
    ZeroSystems,
}

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Invalid breaking configuration: {0}")]
    InvalidJson(String),

    #[error("Cannot read configuration file: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
