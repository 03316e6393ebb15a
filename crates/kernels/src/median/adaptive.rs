//! Adaptive weighted median filter
//!
//! Weighted median for speckle suppression: each window sample gets an
//! integer weight that falls off with distance from the centre and with the
//! window's variance-to-mean ratio, so smooth regions average widely while
//! detailed regions keep their structure.

use crate::maybe_rayon::*;
use grayfilt_core::image::{reflect, GrayImage};
use grayfilt_core::{Error, Filter, Result};

use super::{scan_histogram, validate_window_size, LEVELS};

/// Parameters for the adaptive weighted median filter
#[derive(Debug, Clone)]
pub struct AdaptiveMedianParams {
    /// Side length of the square window (odd, >= 1)
    pub size: usize,
    /// Weight of the window centre; must be finite and positive
    pub centre_weight: f64,
    /// Scaling constant controlling the distance/variance falloff; must be
    /// finite and non-negative
    pub scaling_constant: f64,
}

impl Default for AdaptiveMedianParams {
    fn default() -> Self {
        Self {
            size: 3,
            centre_weight: 99.0,
            scaling_constant: 10.0,
        }
    }
}

/// Adaptive weighted median kernel
#[derive(Debug, Clone, Default)]
pub struct AdaptiveMedianFilter;

impl Filter for AdaptiveMedianFilter {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = AdaptiveMedianParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "AdaptiveHistogramMedianFilter"
    }

    fn description(&self) -> &'static str {
        "Weighted median with data-dependent weights for speckle suppression"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        adaptive_median_filter(&input, &params)
    }
}

/// Apply an adaptive weighted median filter
///
/// For each output pixel the window's mean and population variance are
/// computed, then every sample at distance `d = sqrt(dx² + dy²)` from the
/// centre receives the integer weight
///
/// ```text
/// weight = floor(max(0, centre_weight - scaling_constant * d * variance / mean))
/// ```
///
/// The samples accumulate into a weighted histogram and the output is the
/// first level whose cumulative weight reaches `weight_sum / 2 + 1`.
///
/// When every weight floors to zero, or the window mean is zero (a uniformly
/// black window, where the weight expression is undefined), the kernel falls
/// back to the unweighted window median; no pixel is left unwritten.
///
/// # Arguments
/// * `image` - Input image
/// * `params` - Window size, centre weight and scaling constant
pub fn adaptive_median_filter(image: &GrayImage, params: &AdaptiveMedianParams) -> Result<GrayImage> {
    validate_window_size(params.size)?;
    if !params.centre_weight.is_finite() || params.centre_weight <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "centre_weight",
            value: params.centre_weight.to_string(),
            reason: "centre weight must be finite and positive".to_string(),
        });
    }
    if !params.scaling_constant.is_finite() || params.scaling_constant < 0.0 {
        return Err(Error::InvalidParameter {
            name: "scaling_constant",
            value: params.scaling_constant.to_string(),
            reason: "scaling constant must be finite and non-negative".to_string(),
        });
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let size = params.size;
    let centre_weight = params.centre_weight;
    let scaling_constant = params.scaling_constant;

    let offset = (size / 2) as isize;
    let window_len = size * size;
    let item_count = window_len as f64;

    // The distance grid depends only on the window geometry
    let mut distances = Vec::with_capacity(window_len);
    for dy in -offset..=offset {
        for dx in -offset..=offset {
            distances.push(((dx * dx + dy * dy) as f64).sqrt());
        }
    }

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

                let sum: f64 = scratch.iter().map(|&v| v as f64).sum();
                let mean = sum / item_count;

                let square_diff_total: f64 = scratch
                    .iter()
                    .map(|&v| {
                        let diff = v as f64 - mean;
                        diff * diff
                    })
                    .sum();
                let variance = square_diff_total / item_count;

                let mut histogram = [0u64; LEVELS];
                let mut weight_sum = 0u64;

                if mean > 0.0 {
                    for (idx, &level) in scratch.iter().enumerate() {
                        let raw =
                            centre_weight - scaling_constant * distances[idx] * variance / mean;
                        let weight = raw.max(0.0).floor() as u64;
                        histogram[level as usize] += weight;
                        weight_sum += weight;
                    }
                }

                *row_data_px = if weight_sum == 0 {
                    // Every weight floored to zero (or the window was
                    // uniformly black): fall back to the plain median
                    scratch.sort_unstable();
                    scratch[window_len / 2]
                } else {
                    scan_histogram(&histogram, weight_sum / 2 + 1)
                };
            }

            row_data
        })
        .collect();

    GrayImage::from_raw(width, height, output_data)
}
