//! Morphological closing (dilation followed by erosion)
//!
//! Fills small dark gaps and holes while preserving the overall shape
//! and size of larger dark regions.

use grayfilt_core::image::{GrayImage, Window};
use grayfilt_core::{Error, Filter, Result};

use super::dilate::dilate;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone, Default)]
pub struct ClosingParams {
    /// Window defining the neighborhood shape
    pub window: Window,
}

/// Closing kernel
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl Filter for Closing {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = ClosingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small dark gaps"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        closing(&input, &params.window)
    }
}

/// Perform morphological closing on an image
///
/// Closing = dilate then erode, through an intermediate buffer. Fills
/// small dark features (pits, thin gaps) while preserving the overall
/// shape of larger structures. Idempotent: applying it twice with the
/// same window gives the same result as applying it once.
///
/// # Arguments
/// * `image` - Input image
/// * `window` - Window defining the neighborhood shape
pub fn closing(image: &GrayImage, window: &Window) -> Result<GrayImage> {
    let dilated = dilate(image, window)?;
    erode(&dilated, window)
}
