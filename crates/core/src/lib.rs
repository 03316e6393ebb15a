//! # Grayfilt Core
//!
//! Core types for the grayfilt image-processing kernels.
//!
//! This crate provides:
//! - `GrayImage`: single-channel 8-bit raster buffer
//! - `Window`: neighborhood shape and traversal for windowed kernels
//! - Boundary reflection for out-of-range window coordinates
//! - The `Filter` trait implemented by every kernel

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{GrayImage, Window, WindowShape};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{GrayImage, Window, WindowShape};
    pub use crate::Filter;
}

/// Core trait for all image filters in grayfilt.
///
/// Filters are pure functions that transform input data according to parameters.
pub trait Filter {
    /// Input type for the filter
    type Input;
    /// Output type for the filter
    type Output;
    /// Parameters controlling filter behavior
    type Params: Default;
    /// Error type for filter execution
    type Error: std::error::Error;

    /// Returns the filter name
    fn name(&self) -> &'static str;

    /// Returns a description of what the filter does
    fn description(&self) -> &'static str;

    /// Apply the filter
    fn apply(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Apply with default parameters
    fn apply_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.apply(input, Self::Params::default())
    }
}
