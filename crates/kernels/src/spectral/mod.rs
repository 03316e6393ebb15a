//! Spectral transforms
//!
//! Recursive radix-2 FFT over complex sequences, in one and two dimensions.

mod fft;

pub use fft::{fft, fft2d, ifft, ifft2d};
