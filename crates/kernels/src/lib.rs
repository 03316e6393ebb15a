//! # Grayfilt Kernels
//!
//! Pixel-level transform kernels for grayscale raster buffers.
//!
//! ## Available kernel categories
//!
//! - **morphology**: Erosion, dilation, opening, closing, gradient
//! - **median**: Brute-force, incremental-histogram and adaptive-weighted median filters
//! - **spectral**: Radix-2 FFT over complex sequences
//! - **mask**: Vectorized bitwise masking
//!
//! Every kernel reads only its input buffer and writes a freshly allocated
//! output buffer of identical shape; inputs are never mutated.

mod maybe_rayon;

pub mod mask;
pub mod median;
pub mod morphology;
pub mod spectral;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::mask::{bitwise_and, bitwise_and_in_place, BitwiseAnd, BitwiseAndParams};
    pub use crate::median::{
        adaptive_median_filter, histogram_median_filter, median_filter, AdaptiveMedianFilter,
        AdaptiveMedianParams, HistogramMedianFilter, HistogramMedianParams, MedianFilter,
        MedianParams,
    };
    pub use crate::morphology::{
        closing, dilate, erode, gradient, opening, Closing, ClosingParams, Dilate, DilateParams,
        Erode, ErodeParams, Gradient, GradientParams, Opening, OpeningParams,
    };
    pub use crate::spectral::{fft, fft2d, ifft, ifft2d};
    pub use grayfilt_core::prelude::*;
}
