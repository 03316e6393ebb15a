//! Error types for grayfilt

use thiserror::Error;

/// Main error type for grayfilt operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({x}, {y}) in image of size ({width}, {height})")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Sequence length {0} is not a power of two")]
    NonPowerOfTwoLength(usize),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for grayfilt operations
pub type Result<T> = std::result::Result<T, Error>;
