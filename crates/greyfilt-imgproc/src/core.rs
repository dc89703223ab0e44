use greyfilt_image::{Image, ImageError};

use crate::parallel;

/// Apply a function to every pixel of an image and return the result as a new image.
///
/// The source image is left untouched.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `f` - The per-pixel mapping.
///
/// # Example
///
/// ```
/// use greyfilt_image::Image;
/// use greyfilt_imgproc::core::map_pixels;
///
/// let image = Image::new([2, 1].into(), vec![1u8, 2]).unwrap();
/// let doubled = map_pixels(&image, |&p| p as f64 * 2.0).unwrap();
///
/// assert_eq!(doubled.as_slice(), &[2.0, 4.0]);
/// ```
pub fn map_pixels<T, U>(src: &Image<T>, f: impl Fn(&T) -> U + Send + Sync) -> Result<Image<U>, ImageError>
where
    T: Sync,
    U: Clone + Default + Send,
{
    let mut dst = vec![U::default(); src.num_pixels()];

    parallel::par_iter_rows_val(src.as_slice(), &mut dst, src.cols(), |src_pixel, dst_pixel| {
        *dst_pixel = f(src_pixel);
    });

    Image::new(src.size(), dst)
}

/// Combine two images of the same size pixel by pixel into a new image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images differ in size.
pub fn zip_map_pixels<T1, T2, U>(
    src1: &Image<T1>,
    src2: &Image<T2>,
    f: impl Fn(&T1, &T2) -> U + Send + Sync,
) -> Result<Image<U>, ImageError>
where
    T1: Sync,
    T2: Sync,
    U: Clone + Default + Send,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    let mut dst = vec![U::default(); src1.num_pixels()];

    parallel::par_iter_rows_val_two(
        src1.as_slice(),
        src2.as_slice(),
        &mut dst,
        src1.cols(),
        |a, b, dst_pixel| {
            *dst_pixel = f(a, b);
        },
    );

    Image::new(src1.size(), dst)
}
