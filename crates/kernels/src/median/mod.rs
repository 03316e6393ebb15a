//! Median-family noise reduction kernels
//!
//! Three kernels computing the windowed median of a grayscale image at
//! different complexity/performance trade-offs:
//! - **median_filter**: gather and sort every window (O(n log n) per pixel)
//! - **histogram_median_filter**: per-column incremental histogram (O(size) per pixel)
//! - **adaptive_median_filter**: data-dependent weighted histogram for
//!   speckle suppression
//!
//! All three use a square window of odd side length and the same boundary
//! reflection, so the first two produce bit-identical output.

mod adaptive;
mod histogram;
mod sorting;

pub use adaptive::{adaptive_median_filter, AdaptiveMedianFilter, AdaptiveMedianParams};
pub use histogram::{histogram_median_filter, HistogramMedianFilter, HistogramMedianParams};
pub use sorting::{median_filter, MedianFilter, MedianParams};

use grayfilt_core::{Error, Result};

/// Number of intensity levels in an 8-bit image
pub(crate) const LEVELS: usize = 256;

/// Scan a histogram for the first level whose cumulative count reaches
/// `position`. Ties break toward the lower level.
///
/// The buckets always sum to at least `position` when called (the window
/// population, or the weighted population), so the scan terminates inside
/// the loop.
pub(crate) fn scan_histogram(histogram: &[u64; LEVELS], position: u64) -> u8 {
    let mut counter = 0u64;
    for (level, &count) in histogram.iter().enumerate() {
        counter += count;
        if counter >= position {
            return level as u8;
        }
    }
    u8::MAX
}

/// Validate a square median window size: odd and at least 1.
pub(crate) fn validate_window_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidParameter {
            name: "size",
            value: "0".to_string(),
            reason: "window size must be at least 1".to_string(),
        });
    }
    if size % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "size",
            value: size.to_string(),
            reason: "window size must be odd".to_string(),
        });
    }
    Ok(())
}
