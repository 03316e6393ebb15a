//! Morphological opening (erosion followed by dilation)
//!
//! Removes small bright features (noise, spikes) while preserving
//! the overall shape and size of larger bright regions.

use grayfilt_core::image::{GrayImage, Window};
use grayfilt_core::{Error, Filter, Result};

use super::dilate::dilate;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone, Default)]
pub struct OpeningParams {
    /// Window defining the neighborhood shape
    pub window: Window,
}

/// Opening kernel
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Filter for Opening {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small bright features"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.window)
    }
}

/// Perform morphological opening on an image
///
/// Opening = erode then dilate, through an intermediate buffer. Removes
/// small bright features (spots, thin protrusions) while preserving the
/// overall shape of larger structures. Idempotent: applying it twice with
/// the same window gives the same result as applying it once.
///
/// # Arguments
/// * `image` - Input image
/// * `window` - Window defining the neighborhood shape
pub fn opening(image: &GrayImage, window: &Window) -> Result<GrayImage> {
    let eroded = erode(image, window)?;
    dilate(&eroded, window)
}
