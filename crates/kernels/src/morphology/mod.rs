//! Mathematical morphology kernels for grayscale images
//!
//! Classical morphological operations over a structuring window:
//! - **Erosion**: minimum filter (shrinks bright regions)
//! - **Dilation**: maximum filter (expands bright regions)
//! - **Opening**: erosion then dilation (removes small bright features)
//! - **Closing**: dilation then erosion (fills small dark gaps)
//! - **Gradient**: dilation minus erosion (edge detection)
//!
//! Window coordinates that fall outside the image reflect about the nearest
//! edge, so every output pixel is defined all the way to the border.

mod closing;
mod dilate;
mod erode;
mod gradient;
mod opening;

pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use erode::{erode, Erode, ErodeParams};
pub use gradient::{gradient, Gradient, GradientParams};
pub use opening::{opening, Opening, OpeningParams};

pub use grayfilt_core::image::{Window, WindowShape};
