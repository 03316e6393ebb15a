//! Main image buffer type

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

/// A single-channel 8-bit image.
///
/// `GrayImage` stores intensity samples (0-255) in a flat row-major grid
/// addressed by `(x, y)` with `x` in `[0, width)` and `y` in `[0, height)`.
/// The flat offset of a pixel is `x + y * width`.
///
/// # Example
///
/// ```ignore
/// use grayfilt_core::GrayImage;
///
/// // Create a 100x100 image filled with zeros
/// let mut image = GrayImage::new(100, 100);
///
/// // Set a value
/// image.set(10, 20, 42)?;
///
/// // Get a value
/// let value = image.get(10, 20)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Pixel data stored in row-major order (row = y, column = x)
    data: Array2<u8>,
}

impl GrayImage {
    /// Create a new image filled with zeros
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array2::zeros((height, width)),
        }
    }

    /// Create a new image filled with a specific intensity
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }

    /// Create an image from an existing flat row-major buffer
    ///
    /// Fails if either dimension is zero or the buffer length does not equal
    /// `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if data.len() != width * height {
            return Err(Error::SizeMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }

        let array = Array2::from_shape_vec((height, width), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create an image from an ndarray (shape is `(height, width)`)
    pub fn from_array(data: Array2<u8>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image has no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get the intensity at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<u8> {
        self.data
            .get((y, x))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Get the intensity at (x, y) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure x < self.width() and y < self.height()
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> u8 {
        unsafe { *self.data.uget((y, x)) }
    }

    /// Set the intensity at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.data[(y, x)] = value;
        Ok(())
    }

    /// Set the intensity at (x, y) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure x < self.width() and y < self.height()
    pub unsafe fn set_unchecked(&mut self, x: usize, y: usize, value: u8) {
        unsafe {
            *self.data.uget_mut((y, x)) = value;
        }
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, u8> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<u8> {
        &mut self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> Array2<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let image = GrayImage::new(200, 100);
        assert_eq!(image.width(), 200);
        assert_eq!(image.height(), 100);
        assert_eq!(image.dimensions(), (200, 100));
        assert_eq!(image.len(), 20000);
    }

    #[test]
    fn test_image_access() {
        let mut image = GrayImage::new(10, 10);
        image.set(5, 7, 42).unwrap();
        assert_eq!(image.get(5, 7).unwrap(), 42);
        assert_eq!(image.get(7, 5).unwrap(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let image = GrayImage::new(10, 10);
        assert!(image.get(10, 0).is_err());
        assert!(image.get(0, 10).is_err());
    }

    #[test]
    fn test_from_raw_row_major() {
        let data: Vec<u8> = (0..12).collect();
        let image = GrayImage::from_raw(4, 3, data).unwrap();
        // flat offset x + y * width
        assert_eq!(image.get(0, 0).unwrap(), 0);
        assert_eq!(image.get(3, 0).unwrap(), 3);
        assert_eq!(image.get(0, 1).unwrap(), 4);
        assert_eq!(image.get(3, 2).unwrap(), 11);
    }

    #[test]
    fn test_from_raw_rejects_mismatch() {
        assert!(GrayImage::from_raw(4, 3, vec![0; 11]).is_err());
        assert!(GrayImage::from_raw(0, 3, vec![]).is_err());
        assert!(GrayImage::from_raw(3, 0, vec![]).is_err());
    }

    #[test]
    fn test_filled() {
        let image = GrayImage::filled(5, 5, 100);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(image.get(x, y).unwrap(), 100);
            }
        }
    }
}
