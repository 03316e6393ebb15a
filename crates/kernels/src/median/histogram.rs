//! Incremental-histogram median filter
//!
//! Operates substantially faster than the sorting filter: the window's
//! intensity distribution is kept in a 256-bucket histogram that slides
//! down each column, so only the rows entering and leaving the window are
//! recounted per step.

use crate::maybe_rayon::*;
use grayfilt_core::image::{reflect, GrayImage};
use grayfilt_core::{Error, Filter, Result};

use super::{scan_histogram, validate_window_size, LEVELS};

/// Parameters for the incremental-histogram median filter
#[derive(Debug, Clone)]
pub struct HistogramMedianParams {
    /// Side length of the square window (odd, >= 1)
    pub size: usize,
}

impl Default for HistogramMedianParams {
    fn default() -> Self {
        Self { size: 3 }
    }
}

/// Incremental-histogram median kernel
#[derive(Debug, Clone, Default)]
pub struct HistogramMedianFilter;

impl Filter for HistogramMedianFilter {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = HistogramMedianParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "HistogramMedianFilter"
    }

    fn description(&self) -> &'static str {
        "Windowed median via an incrementally updated histogram"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        histogram_median_filter(&input, params.size)
    }
}

/// Apply a median filter using a per-column sliding histogram
///
/// Columns are independent and distributed across workers; within a column
/// the rows are processed strictly top to bottom by one histogram. At the
/// top of a column the full window is counted; every following row updates
/// the histogram in O(size) by removing the row that left the window
/// (`y - offset - 1`) and adding the row that entered (`y + offset`). The
/// bucket sum equals `size * size` at every row.
///
/// Uses the same window and boundary reflection as [`median_filter`], so
/// the two produce bit-identical output.
///
/// [`median_filter`]: crate::median::median_filter
///
/// # Arguments
/// * `image` - Input image
/// * `size` - Side length of the square window (odd, >= 1)
pub fn histogram_median_filter(image: &GrayImage, size: usize) -> Result<GrayImage> {
    validate_window_size(size)?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let offset = (size / 2) as isize;
    let median_position = (size * size / 2 + 1) as u64;

    let columns: Vec<Vec<u8>> = (0..width)
        .into_par_iter()
        .map(|x| {
            let mut column = vec![0u8; height];
            let mut histogram = [0u64; LEVELS];

            for (y, column_px) in column.iter_mut().enumerate() {
                if y == 0 {
                    // Top of the column: count the entire window
                    for dy in -offset..=offset {
                        for dx in -offset..=offset {
                            let sx = reflect(x as isize + dx, width);
                            let sy = reflect(dy, height);
                            let level = unsafe { image.get_unchecked(sx, sy) };
                            histogram[level as usize] += 1;
                        }
                    }
                } else {
                    // Most of the histogram carries over: drop the old top
                    // row, add the new bottom row
                    for dx in -offset..=offset {
                        let sx = reflect(x as isize + dx, width);

                        let sy = reflect(y as isize - offset - 1, height);
                        let level = unsafe { image.get_unchecked(sx, sy) };
                        histogram[level as usize] -= 1;

                        let sy = reflect(y as isize + offset, height);
                        let level = unsafe { image.get_unchecked(sx, sy) };
                        histogram[level as usize] += 1;
                    }
                }

                *column_px = scan_histogram(&histogram, median_position);
            }

            column
        })
        .collect();

    let mut output = GrayImage::new(width, height);
    for (x, column) in columns.iter().enumerate() {
        for (y, &value) in column.iter().enumerate() {
            unsafe { output.set_unchecked(x, y, value) };
        }
    }
    Ok(output)
}
