use image::DynamicImage;
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::filters::{apply_border_mask, gaussian_blur_array};

use super::config::ComparatorConfig;

/// Convert a decoded image to single-channel luminance in [0.0, 1.0].
/// Shape is (height, width).
pub fn to_luminance(image: &DynamicImage) -> Array2<f32> {
    let rgb = image.to_rgb32f();
    let (w, h) = rgb.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        let [r, g, b] = rgb.get_pixel(col as u32, row as u32).0;
        (LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b).clamp(0.0, 1.0)
    })
}

/// Luminance -> blur pass per configured sigma -> border mask.
///
/// Output has the same spatial dimensions as the input image.
pub fn preprocess(image: &DynamicImage, config: &ComparatorConfig) -> Array2<f32> {
    let mut data = to_luminance(image);
    for &sigma in &config.blur_sigmas {
        data = gaussian_blur_array(&data, sigma);
    }
    apply_border_mask(&mut data, &config.border_mask);
    data
}
