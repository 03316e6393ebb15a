//! Benchmarks for the windowed kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grayfilt_core::{GrayImage, Window};
use grayfilt_kernels::median::{
    adaptive_median_filter, histogram_median_filter, median_filter, AdaptiveMedianParams,
};
use grayfilt_kernels::morphology::{dilate, erode, gradient};

fn create_test_image(size: usize) -> GrayImage {
    let mut image = GrayImage::new(size, size);
    // Varied surface with some structure
    for y in 0..size {
        for x in 0..size {
            let v = ((x * 7 + y * 13) % 256) as u8;
            image.set(x, y, v).unwrap();
        }
    }
    image
}

fn bench_erode(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode");
    let window = Window::square(3);
    for size in [256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| erode(black_box(&image), &window).unwrap())
        });
    }
    group.finish();
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate");
    let window = Window::square(3);
    for size in [256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| dilate(black_box(&image), &window).unwrap())
        });
    }
    group.finish();
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/gradient");
    let window = Window::square(3);
    for size in [256, 512] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| gradient(black_box(&image), &window).unwrap())
        });
    }
    group.finish();
}

fn bench_median_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("median/sorting");
    let image = create_test_image(512);
    for window_size in [3, 5, 7] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            &window_size,
            |b, &ws| b.iter(|| median_filter(black_box(&image), ws).unwrap()),
        );
    }
    group.finish();
}

fn bench_median_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("median/histogram");
    let image = create_test_image(512);
    for window_size in [3, 5, 7] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            &window_size,
            |b, &ws| b.iter(|| histogram_median_filter(black_box(&image), ws).unwrap()),
        );
    }
    group.finish();
}

fn bench_median_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("median/adaptive");
    let image = create_test_image(512);
    for window_size in [3, 5] {
        let params = AdaptiveMedianParams {
            size: window_size,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            &window_size,
            |b, _| b.iter(|| adaptive_median_filter(black_box(&image), &params).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_erode,
    bench_dilate,
    bench_gradient,
    bench_median_sorting,
    bench_median_histogram,
    bench_median_adaptive
);
criterion_main!(benches);
