//! Error types for U-Cuboid.

use crate::cuboid::{MAX_DIMENSION, MIN_DIMENSION};
use thiserror::Error;

/// Result type alias for U-Cuboid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing, formatting or parsing cuboids.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A dimension fell outside the valid range after unit conversion.
    #[error(
        "Dimension {dimension} is out of range: {value} m (expected {} m <= value < {} m)",
        MIN_DIMENSION,
        MAX_DIMENSION
    )]
    OutOfRange {
        /// Which dimension was rejected (`a`, `b` or `c`).
        dimension: char,
        /// The offending value, in meters.
        value: f64,
    },

    /// Unrecognized unit of measure.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Unrecognized format code or unit suffix.
    #[error("The {0} format is not supported")]
    UnsupportedFormat(String),

    /// Malformed textual input.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dimension index outside 0..=2.
    #[error("Index {0} is out of range (expected 0, 1 or 2)")]
    IndexOutOfRange(usize),
}
