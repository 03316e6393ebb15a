//! Image buffer, window and boundary handling

mod bounds;
mod buffer;
mod window;

pub use bounds::{map_index, reflect};
pub use buffer::GrayImage;
pub use window::{Window, WindowShape};
