use greyfilt_image::{Image, ImageError, ImageSize};

/// Define the RGB weights for the greyscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Luma of a single RGB sample, `round(0.299 * R + 0.587 * G + 0.114 * B)`.
///
/// Ties round to the nearest even integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = RW * r as f64 + GW * g as f64 + BW * b as f64;
    y.round_ties_even().clamp(0.0, 255.0) as u8
}

fn check_len(src: &[u8], size: ImageSize, channels: usize) -> Result<(), ImageError> {
    if src.len() != size.area() * channels {
        return Err(ImageError::InvalidDataLength(
            src.len(),
            size.area() * channels,
        ));
    }
    Ok(())
}

/// Convert an interleaved RGB8 buffer to a greyscale image.
///
/// # Arguments
///
/// * `src` - The interleaved `[R, G, B, R, G, B, ...]` samples, row-major.
/// * `size` - The size of the image in pixels.
///
/// # Example
///
/// ```
/// use greyfilt_io::gray::gray_from_rgb8;
///
/// let gray = gray_from_rgb8(&[255, 0, 0, 0, 255, 0, 0, 0, 255], [3, 1].into()).unwrap();
///
/// assert_eq!(gray.as_slice(), &[76, 150, 29]);
/// ```
pub fn gray_from_rgb8(src: &[u8], size: ImageSize) -> Result<Image<u8>, ImageError> {
    check_len(src, size, 3)?;
    let data = src
        .chunks_exact(3)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();
    Image::new(size, data)
}

/// Convert an interleaved RGBA8 buffer to a greyscale image, ignoring alpha.
pub fn gray_from_rgba8(src: &[u8], size: ImageSize) -> Result<Image<u8>, ImageError> {
    check_len(src, size, 4)?;
    let data = src
        .chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();
    Image::new(size, data)
}

/// Keep the grey channel of an interleaved grey+alpha buffer.
pub fn gray_from_luma_alpha8(src: &[u8], size: ImageSize) -> Result<Image<u8>, ImageError> {
    check_len(src, size, 2)?;
    let data = src.chunks_exact(2).map(|px| px[0]).collect();
    Image::new(size, data)
}
