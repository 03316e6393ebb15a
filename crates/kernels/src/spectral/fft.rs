//! Radix-2 decimation-in-time FFT
//!
//! Textbook recursive Cooley-Tukey: split into even- and odd-indexed
//! halves, transform each, combine with twiddle factors. Sequence lengths
//! must be powers of two; anything else is rejected up front.

use std::f64::consts::PI;

use grayfilt_core::{Error, Result};
use num_complex::Complex64;

/// Compute the forward FFT of a complex sequence.
///
/// The length must be a power of two (and therefore non-zero).
pub fn fft(input: &[Complex64]) -> Result<Vec<Complex64>> {
    if !input.len().is_power_of_two() {
        return Err(Error::NonPowerOfTwoLength(input.len()));
    }
    Ok(fft_recursive(input))
}

/// Compute the inverse FFT of a complex sequence.
///
/// Uses the re/im swap identity: swapping the components of every sample,
/// running the forward transform, and swapping back yields the unscaled
/// inverse, which is then normalized by `1/N` so that `ifft(fft(x)) == x`.
pub fn ifft(input: &[Complex64]) -> Result<Vec<Complex64>> {
    if !input.len().is_power_of_two() {
        return Err(Error::NonPowerOfTwoLength(input.len()));
    }

    let swapped: Vec<Complex64> = input.iter().map(|c| Complex64::new(c.im, c.re)).collect();
    let transformed = fft_recursive(&swapped);

    let scale = 1.0 / input.len() as f64;
    Ok(transformed
        .iter()
        .map(|c| Complex64::new(c.im * scale, c.re * scale))
        .collect())
}

fn fft_recursive(x: &[Complex64]) -> Vec<Complex64> {
    if x.len() == 1 {
        return x.to_vec();
    }

    let half = x.len() / 2;
    let even: Vec<Complex64> = x.iter().copied().step_by(2).collect();
    let odd: Vec<Complex64> = x.iter().copied().skip(1).step_by(2).collect();

    let even = fft_recursive(&even);
    let odd = fft_recursive(&odd);

    let mut output = vec![Complex64::new(0.0, 0.0); x.len()];
    for i in 0..half {
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * i as f64 / x.len() as f64);
        let t = twiddle * odd[i];
        output[i] = even[i] + t;
        output[i + half] = even[i] - t;
    }
    output
}

/// Compute the forward FFT of a 2D complex buffer in row-major order.
///
/// Rows are transformed first, then columns. Both `width` and `height`
/// must be powers of two and the buffer length must equal their product.
pub fn fft2d(input: &[Complex64], width: usize, height: usize) -> Result<Vec<Complex64>> {
    fft2d_with(input, width, height, fft)
}

/// Compute the inverse FFT of a 2D complex buffer in row-major order.
///
/// The per-axis `1/N` scaling composes to `1/(width * height)` overall, so
/// `ifft2d(fft2d(x)) == x`.
pub fn ifft2d(input: &[Complex64], width: usize, height: usize) -> Result<Vec<Complex64>> {
    fft2d_with(input, width, height, ifft)
}

fn fft2d_with(
    input: &[Complex64],
    width: usize,
    height: usize,
    transform: fn(&[Complex64]) -> Result<Vec<Complex64>>,
) -> Result<Vec<Complex64>> {
    if !width.is_power_of_two() {
        return Err(Error::NonPowerOfTwoLength(width));
    }
    if !height.is_power_of_two() {
        return Err(Error::NonPowerOfTwoLength(height));
    }
    if input.len() != width * height {
        return Err(Error::SizeMismatch {
            expected: width * height,
            actual: input.len(),
        });
    }

    // Transform each row in place of the original buffer
    let mut rows_done = Vec::with_capacity(input.len());
    for row in input.chunks_exact(width) {
        rows_done.extend(transform(row)?);
    }

    // Then each column
    let mut output = vec![Complex64::new(0.0, 0.0); input.len()];
    let mut column = vec![Complex64::new(0.0, 0.0); height];
    for x in 0..width {
        for y in 0..height {
            column[y] = rows_done[x + y * width];
        }
        let transformed = transform(&column)?;
        for (y, value) in transformed.into_iter().enumerate() {
            output[x + y * width] = value;
        }
    }

    Ok(output)
}
