use greyfilt_image::{Image, ImageError};

use crate::core::map_pixels;

/// Round a real value to the nearest integer and saturate it to `[0, 255]`.
///
/// Ties round to the nearest even integer, so `2.5` becomes `2` and `3.5`
/// becomes `4`. NaN maps to `0`.
///
/// # Example
///
/// ```
/// use greyfilt_imgproc::quantize::quantize_value;
///
/// assert_eq!(quantize_value(28.333), 28);
/// assert_eq!(quantize_value(-12.0), 0);
/// assert_eq!(quantize_value(300.7), 255);
/// assert_eq!(quantize_value(10.5), 10);
/// ```
#[inline]
pub fn quantize_value(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    x.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Round and clip a real-valued image into valid 8-bit pixels.
///
/// Every pixel goes through [`quantize_value`]. This is the last step of every
/// neighborhood filter and the only one that guarantees valid 8-bit samples.
///
/// # Arguments
///
/// * `src` - The real-valued image, typically the output of a correlation.
///
/// # Returns
///
/// A new image with the same size and pixels in `[0, 255]`.
pub fn round_and_clip(src: &Image<f64>) -> Result<Image<u8>, ImageError> {
    map_pixels(src, |&x| quantize_value(x))
}
