//! Bitwise mask kernel
//!
//! Masks every intensity sample against a single byte. The bulk of the
//! buffer is processed in fixed-width groups that the compiler can
//! vectorize; the trailing partial group is handled by an explicit scalar
//! loop so no byte is ever skipped.

use grayfilt_core::image::GrayImage;
use grayfilt_core::{Error, Filter, Result};

/// Width of the vectorizable group
const GROUP: usize = 16;

/// Parameters for the bitwise AND kernel
#[derive(Debug, Clone)]
pub struct BitwiseAndParams {
    /// Mask applied to every byte
    pub mask: u8,
}

impl Default for BitwiseAndParams {
    fn default() -> Self {
        Self { mask: 0xFF }
    }
}

/// Bitwise AND kernel
#[derive(Debug, Clone, Default)]
pub struct BitwiseAnd;

impl Filter for BitwiseAnd {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = BitwiseAndParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "BitwiseAndFilter"
    }

    fn description(&self) -> &'static str {
        "Bitwise AND of every pixel against a mask byte"
    }

    fn apply(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        bitwise_and(&input, params.mask)
    }
}

/// Mask every pixel of an image against a byte, into a fresh image
pub fn bitwise_and(image: &GrayImage, mask: u8) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let mut data: Vec<u8> = image.data().iter().copied().collect();
    bitwise_and_in_place(&mut data, mask);
    GrayImage::from_raw(width, height, data)
}

/// Mask every byte of a buffer in place.
///
/// Processes `GROUP`-sized chunks first, then the remainder one byte at a
/// time — a buffer whose length is not a multiple of the group width still
/// has every trailing byte masked.
pub fn bitwise_and_in_place(data: &mut [u8], mask: u8) {
    let mut chunks = data.chunks_exact_mut(GROUP);
    for chunk in &mut chunks {
        for byte in chunk {
            *byte &= mask;
        }
    }
    for byte in chunks.into_remainder() {
        *byte &= mask;
    }
}
