// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Image preprocessing for lesion inference.
//!
//! Reproduces the preprocessing the classifier was trained with: resize the
//! source image to a fixed spatial size with nearest-neighbor interpolation
//! (no aspect-ratio preservation, distortion on non-square inputs is
//! intentional), then normalize channel values to `[0, 1]`.

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

/// Reciprocal of 255 for normalization.
const INV_255: f32 = 1.0 / 255.0;

/// Preprocess an image for lesion inference.
///
/// Produces an NHWC tensor of shape `(1, height, width, 3)` with values in
/// `[0, 1]`, matching the layout of the trained network's image input.
///
/// # Arguments
///
/// * `image` - Input image.
/// * `target_size` - Target size as (height, width).
#[must_use]
pub fn preprocess_image(image: &DynamicImage, target_size: (u32, u32)) -> Array4<f32> {
    let (height, width) = target_size;

    // Exact resize, not letterbox: the training pipeline stretched inputs
    // to 224x224 and inference must match it.
    let rgb = image
        .resize_exact(width, height, FilterType::Nearest)
        .to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, height as usize, width as usize, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, y as usize, x as usize, c]] = f32::from(pixel[c]) * INV_255;
        }
    }
    tensor
}
