//! Brute-force median filter
//!
//! Gathers every window into a scratch buffer and sorts it. Simple and
//! obviously correct; the reference the histogram variants are checked
//! against.

use crate::maybe_rayon::*;
use grayfilt_core::image::{reflect, GrayImage};
use grayfilt_core::{Error, Filter, Result};

use super::validate_window_size;

/// Parameters for the brute-force median filter
#[derive(Debug, Clone)]
pub struct MedianParams {
    /// Side length of the square window (odd, >= 1)
    pub size: usize,
}

impl Default for MedianParams {
    fn default() -> Self {
        Self { size: 3 }
    }
}

/// Brute-force median kernel
#[derive(Debug, Clone, Default)]
pub struct MedianFilter;

impl Filter for MedianFilter {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = MedianParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "MedianFilter"
    }

    fn description(&self) -> &'static str {
        "Windowed median by sorting each neighborhood"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        median_filter(&input, params.size)
    }
}

/// Apply a median filter by sorting each window
///
/// Each output pixel is the middle value of the sorted window intensities.
/// The gather buffer is allocated once per row task and reused across the
/// row's pixels, not reallocated per pixel.
///
/// # Arguments
/// * `image` - Input image
/// * `size` - Side length of the square window (odd, >= 1)
pub fn median_filter(image: &GrayImage, size: usize) -> Result<GrayImage> {
    validate_window_size(size)?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let offset = (size / 2) as isize;
    let window_len = size * size;
    let median_index = window_len / 2;

    let output_data: Vec<u8> = (0..height)
        .into_par_iter()
        .flat_map(|y| {
            let mut row_data = vec![0u8; width];
            let mut scratch = vec![0u8; window_len];

            for (x, row_data_px) in row_data.iter_mut().enumerate() {
                let mut count = 0;
                for dy in -offset..=offset {
                    for dx in -offset..=offset {
                        let sx = reflect(x as isize + dx, width);
                        let sy = reflect(y as isize + dy, height);
                        scratch[count] = unsafe { image.get_unchecked(sx, sy) };
                        count += 1;
                    }
                }

                scratch.sort_unstable();
                *row_data_px = scratch[median_index];
            }

            row_data
        })
        .collect();

    GrayImage::from_raw(width, height, output_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_uniform() {
        let image = GrayImage::filled(5, 5, 100);
        let result = median_filter(&image, 3).unwrap();
        assert_eq!(result, image, "uniform input is a fixed point");
    }

    #[test]
    fn test_median_removes_impulse() {
        let mut image = GrayImage::filled(7, 7, 50);
        image.set(3, 3, 255).unwrap();

        let result = median_filter(&image, 3).unwrap();
        assert_eq!(
            result.get(3, 3).unwrap(),
            50,
            "a lone impulse never reaches the window median"
        );
    }

    #[test]
    fn test_median_interior_value() {
        // 3x3 block with known intensities around the centre
        let data = vec![
            10, 20, 30, //
            40, 50, 60, //
            70, 80, 90,
        ];
        let image = GrayImage::from_raw(3, 3, data).unwrap();
        let result = median_filter(&image, 3).unwrap();
        // Centre window is the whole image; median of 10..90 is 50
        assert_eq!(result.get(1, 1).unwrap(), 50);
    }

    #[test]
    fn test_median_size_one_is_identity() {
        let mut image = GrayImage::new(6, 4);
        for y in 0..4 {
            for x in 0..6 {
                image.set(x, y, ((x * 41 + y * 11) % 256) as u8).unwrap();
            }
        }
        let result = median_filter(&image, 1).unwrap();
        assert_eq!(result, image);
    }

    #[test]
    fn test_median_rejects_even_window() {
        let image = GrayImage::new(5, 5);
        assert!(median_filter(&image, 4).is_err());
        assert!(median_filter(&image, 0).is_err());
    }
}
