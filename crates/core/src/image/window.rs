//! Window definitions for windowed kernels
//!
//! A window defines the neighborhood shape traversed by morphological and
//! statistical filters.

use crate::error::{Error, Result};

/// Shape of a filter window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowShape {
    /// Full square neighborhood
    Square,
    /// Disk neighborhood: offsets with `sqrt(dx² + dy²) < offset`
    Disk,
    /// Cross (plus-shaped) neighborhood: horizontal and vertical arms only
    Cross,
}

/// A square-bounded neighborhood of odd side length centred on a pixel.
///
/// `size` is the side length of the bounding square; the window extends
/// `offset = size / 2` pixels in each direction. The shape flag restricts
/// which offsets inside the bounding square participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    size: usize,
    shape: WindowShape,
}

impl Default for Window {
    fn default() -> Self {
        Window::square(3)
    }
}

impl Window {
    /// Create a window of the given size and shape
    pub fn new(size: usize, shape: WindowShape) -> Self {
        Self { size, shape }
    }

    /// Create a square window of the given side length
    pub fn square(size: usize) -> Self {
        Self::new(size, WindowShape::Square)
    }

    /// Create a disk window of the given side length.
    ///
    /// The disk test is strict (`distance < offset`), so `disk(3)` contains
    /// only the centre pixel.
    pub fn disk(size: usize) -> Self {
        Self::new(size, WindowShape::Disk)
    }

    /// Create a cross window of the given side length
    pub fn cross(size: usize) -> Self {
        Self::new(size, WindowShape::Cross)
    }

    /// Validate the window, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidParameter {
                name: "size",
                value: "0".to_string(),
                reason: "window size must be at least 1".to_string(),
            });
        }
        if self.size % 2 == 0 {
            return Err(Error::InvalidParameter {
                name: "size",
                value: self.size.to_string(),
                reason: "window size must be odd".to_string(),
            });
        }
        Ok(())
    }

    /// Side length of the bounding square
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width of the window
    pub fn offset(&self) -> usize {
        self.size / 2
    }

    /// Shape of the window
    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    /// Check whether a relative position participates in this window
    pub fn contains(&self, dx: isize, dy: isize) -> bool {
        let offset = self.offset() as isize;
        if dx.abs() > offset || dy.abs() > offset {
            return false;
        }
        match self.shape {
            WindowShape::Square => true,
            WindowShape::Disk => {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                dist < offset as f64
            }
            WindowShape::Cross => dx == 0 || dy == 0,
        }
    }

    /// Compute (dx, dy) offsets relative to the centre for all active cells
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let offset = self.offset() as isize;
        let mut offsets = Vec::with_capacity(self.size * self.size);

        for dy in -offset..=offset {
            for dx in -offset..=offset {
                if self.contains(dx, dy) {
                    offsets.push((dx, dy));
                }
            }
        }

        offsets
    }
}
