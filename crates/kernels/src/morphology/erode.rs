//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum intensity in its window
//! neighborhood. Shrinks bright regions and enlarges dark regions.

use crate::maybe_rayon::*;
use grayfilt_core::image::{reflect, GrayImage, Window};
use grayfilt_core::{Error, Filter, Result};

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Window defining the neighborhood shape
    pub window: Window,
}

/// Erosion kernel
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Filter for Erode {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over a window)"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.window)
    }
}

/// Perform morphological erosion on an image
///
/// Each output pixel is the minimum intensity within the window. Coordinates
/// past the image edge reflect back inside, so border pixels get a full
/// window rather than a truncated one.
///
/// # Arguments
/// * `image` - Input image
/// * `window` - Window defining the neighborhood shape
pub fn erode(image: &GrayImage, window: &Window) -> Result<GrayImage> {
    window.validate()?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let offsets = window.offsets();

    let output_data: Vec<u8> = (0..height)
        .into_par_iter()
        .flat_map(|y| {
            let mut row_data = vec![0u8; width];

            for (x, row_data_px) in row_data.iter_mut().enumerate() {
                let mut min_val = u8::MAX;

                for &(dx, dy) in &offsets {
                    let sx = reflect(x as isize + dx, width);
                    let sy = reflect(y as isize + dy, height);
                    let v = unsafe { image.get_unchecked(sx, sy) };
                    if v < min_val {
                        min_val = v;
                    }
                }

                *row_data_px = min_val;
            }

            row_data
        })
        .collect();

    GrayImage::from_raw(width, height, output_data)
}
