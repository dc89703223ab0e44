use greyfilt_image::{Image, ImageError, PixelType};

use super::{correlate, kernels};
use crate::{
    core::{map_pixels, zip_map_pixels},
    quantize::{quantize_value, round_and_clip},
};

/// Invert an 8-bit greyscale image, `dst = 255 - src`.
///
/// # Example
///
/// ```
/// use greyfilt_image::Image;
/// use greyfilt_imgproc::filter::invert;
///
/// let image = Image::new([3, 1].into(), vec![0u8, 100, 255]).unwrap();
/// let inverted = invert(&image).unwrap();
///
/// assert_eq!(inverted.as_slice(), &[255, 155, 0]);
/// ```
pub fn invert(src: &Image<u8>) -> Result<Image<u8>, ImageError> {
    map_pixels(src, |&p| 255 - p)
}

/// Blur an image with a box kernel without rounding or clipping the result.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The size of the square box kernel.
pub fn box_blur_unclipped<T: PixelType>(
    src: &Image<T>,
    kernel_size: usize,
) -> Result<Image<f64>, ImageError> {
    let kernel = kernels::box_blur_kernel_2d(kernel_size)?;
    correlate(src, &kernel)
}

/// Blur an image using a box blur filter.
///
/// Each pixel becomes the average of the `kernel_size x kernel_size`
/// neighborhood centered on it, rounded and clipped to 8 bits. A kernel size
/// of one leaves the image unchanged.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The size of the square box kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] for a zero kernel size.
pub fn box_blur<T: PixelType>(src: &Image<T>, kernel_size: usize) -> Result<Image<u8>, ImageError> {
    let blurred = box_blur_unclipped(src, kernel_size)?;
    round_and_clip(&blurred)
}

/// Sharpen an image with an unsharp mask.
///
/// The high frequencies are amplified by subtracting the box blurred image
/// from twice the original, `dst = 2 * src - blur(src)`, then rounded and
/// clipped to 8 bits.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The size of the box kernel used for the blur.
pub fn sharpen<T: PixelType>(src: &Image<T>, kernel_size: usize) -> Result<Image<u8>, ImageError> {
    let blurred = box_blur_unclipped(src, kernel_size)?;

    zip_map_pixels(src, &blurred, |&p, &b| {
        let p: f64 = p.into();
        quantize_value(2.0 * p - b)
    })
}

/// Compute the Sobel edge magnitude of an image.
///
/// The image is correlated with the horizontal and vertical 3x3 Sobel kernels
/// and each pixel becomes `sqrt(gx² + gy²)`, rounded and clipped to 8 bits.
///
/// # Arguments
///
/// * `src` - The source image.
pub fn sobel_edges<T: PixelType>(src: &Image<T>) -> Result<Image<u8>, ImageError> {
    let (kernel_x, kernel_y) = kernels::sobel_kernel_2d();

    let gx = correlate(src, &kernel_x)?;
    let gy = correlate(src, &kernel_y)?;

    zip_map_pixels(&gx, &gy, |&gx, &gy| quantize_value((gx * gx + gy * gy).sqrt()))
}
