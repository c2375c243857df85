use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma};

/// Uniform grayscale image.
pub fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Grayscale background with one filled square block at (x, y).
pub fn with_block(
    width: u32,
    height: u32,
    background: u8,
    x: u32,
    y: u32,
    size: u32,
    value: u8,
) -> DynamicImage {
    with_rect(width, height, background, x, y, size, size, value)
}

/// Grayscale background with one filled rectangle at (x, y).
#[allow(clippy::too_many_arguments)]
pub fn with_rect(
    width: u32,
    height: u32,
    background: u8,
    x: u32,
    y: u32,
    rect_w: u32,
    rect_h: u32,
    value: u8,
) -> DynamicImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([background]));
    for row in y..(y + rect_h).min(height) {
        for col in x..(x + rect_w).min(width) {
            img.put_pixel(col, row, Luma([value]));
        }
    }
    DynamicImage::ImageLuma8(img)
}

/// Save an image as PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("write test PNG");
    path
}
