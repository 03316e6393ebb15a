//! Cross-kernel properties: equivalence of the median implementations,
//! morphological ordering, and fixed points on uniform input.

use grayfilt_kernels::prelude::*;

/// Deterministic speckled test image
fn speckled(width: usize, height: usize) -> GrayImage {
    let mut image = GrayImage::new(width, height);
    let mut state = 0x2545_f491u32;
    for y in 0..height {
        for x in 0..width {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            image.set(x, y, (state & 0xFF) as u8).unwrap();
        }
    }
    image
}

#[test]
fn median_filters_are_bit_identical() {
    let image = speckled(31, 24);
    for size in [1, 3, 5, 7] {
        let sorted = median_filter(&image, size).unwrap();
        let histogram = histogram_median_filter(&image, size).unwrap();
        assert_eq!(
            sorted, histogram,
            "sorting and histogram medians disagree for window size {}",
            size
        );
    }
}

#[test]
fn median_filters_agree_on_extreme_aspect_ratios() {
    for (width, height) in [(1, 30), (30, 1), (2, 17), (5, 5)] {
        let image = speckled(width, height);
        let sorted = median_filter(&image, 3).unwrap();
        let histogram = histogram_median_filter(&image, 3).unwrap();
        assert_eq!(
            sorted, histogram,
            "medians disagree on a {}x{} image",
            width, height
        );
    }
}

#[test]
fn uniform_image_is_a_fixed_point_of_every_windowed_kernel() {
    let image = GrayImage::filled(5, 5, 100);
    let window = Window::square(3);

    assert_eq!(erode(&image, &window).unwrap(), image);
    assert_eq!(dilate(&image, &window).unwrap(), image);
    assert_eq!(median_filter(&image, 3).unwrap(), image);
    assert_eq!(histogram_median_filter(&image, 3).unwrap(), image);
    assert_eq!(
        adaptive_median_filter(&image, &AdaptiveMedianParams::default()).unwrap(),
        image
    );
}

#[test]
fn dilation_dominates_erosion_and_gradient_is_their_difference() {
    let image = speckled(23, 17);
    for window in [Window::square(3), Window::square(5), Window::disk(5)] {
        let dilated = dilate(&image, &window).unwrap();
        let eroded = erode(&image, &window).unwrap();
        let grad = gradient(&image, &window).unwrap();

        for y in 0..17 {
            for x in 0..23 {
                let d = dilated.get(x, y).unwrap();
                let e = eroded.get(x, y).unwrap();
                assert!(d >= e, "dilate < erode at ({}, {}) for {:?}", x, y, window);
                assert_eq!(
                    grad.get(x, y).unwrap(),
                    d - e,
                    "gradient mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn opening_and_closing_are_idempotent() {
    let image = speckled(20, 15);
    for window in [Window::square(3), Window::cross(3), Window::square(5)] {
        let opened = opening(&image, &window).unwrap();
        assert_eq!(
            opening(&opened, &window).unwrap(),
            opened,
            "opening not idempotent for {:?}",
            window
        );

        let closed = closing(&image, &window).unwrap();
        assert_eq!(
            closing(&closed, &window).unwrap(),
            closed,
            "closing not idempotent for {:?}",
            window
        );
    }
}

#[test]
fn kernels_never_mutate_their_input() {
    let image = speckled(12, 12);
    let pristine = image.clone();

    let _ = erode(&image, &Window::square(3)).unwrap();
    let _ = median_filter(&image, 3).unwrap();
    let _ = histogram_median_filter(&image, 5).unwrap();
    let _ = adaptive_median_filter(&image, &AdaptiveMedianParams::default()).unwrap();
    let _ = bitwise_and(&image, 0x0F).unwrap();

    assert_eq!(image, pristine);
}

#[test]
fn filter_trait_matches_free_functions() {
    let image = speckled(10, 10);

    let via_trait = Erode.apply(image.clone(), ErodeParams::default()).unwrap();
    let via_fn = erode(&image, &Window::default()).unwrap();
    assert_eq!(via_trait, via_fn);

    let via_trait = MedianFilter.apply_default(image.clone()).unwrap();
    let via_fn = median_filter(&image, 3).unwrap();
    assert_eq!(via_trait, via_fn);

    let via_trait = BitwiseAnd
        .apply(image.clone(), BitwiseAndParams { mask: 0x3C })
        .unwrap();
    let via_fn = bitwise_and(&image, 0x3C).unwrap();
    assert_eq!(via_trait, via_fn);
}
