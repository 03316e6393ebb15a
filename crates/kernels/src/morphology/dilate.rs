//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum intensity in its window
//! neighborhood. Enlarges bright regions and shrinks dark regions.

use crate::maybe_rayon::*;
use grayfilt_core::image::{reflect, GrayImage, Window};
use grayfilt_core::{Error, Filter, Result};

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Window defining the neighborhood shape
    pub window: Window,
}

/// Dilation kernel
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Filter for Dilate {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over a window)"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.window)
    }
}

/// Perform morphological dilation on an image
///
/// Each output pixel is the maximum intensity within the window. Coordinates
/// past the image edge reflect back inside.
///
/// # Arguments
/// * `image` - Input image
/// * `window` - Window defining the neighborhood shape
pub fn dilate(image: &GrayImage, window: &Window) -> Result<GrayImage> {
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
                let mut max_val = u8::MIN;

                for &(dx, dy) in &offsets {
                    let sx = reflect(x as isize + dx, width);
                    let sy = reflect(y as isize + dy, height);
                    let v = unsafe { image.get_unchecked(sx, sy) };
                    if v > max_val {
                        max_val = v;
                    }
                }

                *row_data_px = max_val;
            }

            row_data
        })
        .collect();

    GrayImage::from_raw(width, height, output_data)
}
