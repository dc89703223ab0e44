use greyfilt_image::{Image, ImageError, PixelType};

use super::kernels::Kernel;
use crate::{border::get_pixel, parallel};

/// Correlate an image with a square kernel.
///
/// Each output pixel is the weighted sum of the `n x n` neighborhood centered
/// on it, without flipping the kernel. Samples outside the image replicate the
/// nearest edge pixel. The result is neither rounded nor clipped.
///
/// ```text
/// dst[x, y] = sum_{kr, kc} kernel[kr, kc] * src[x - half + kr, y - half + kc]
/// ```
///
/// with `half = (n - 1) / 2`. The weights are accumulated in row-major kernel
/// order for every pixel, so the result does not depend on how rows are
/// scheduled across threads.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The correlation kernel.
///
/// # Returns
///
/// A real-valued image with the same size as `src`.
///
/// # Example
///
/// ```
/// use greyfilt_image::Image;
/// use greyfilt_imgproc::filter::{correlate, kernels::Kernel};
///
/// let image = Image::new([3, 1].into(), vec![0u8, 90, 0]).unwrap();
/// let kernel = Kernel::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
///
/// // shift right by one pixel, the left edge is replicated
/// let shifted = correlate(&image, &kernel).unwrap();
/// assert_eq!(shifted.as_slice(), &[0.0, 0.0, 90.0]);
/// ```
pub fn correlate<T: PixelType>(src: &Image<T>, kernel: &Kernel) -> Result<Image<f64>, ImageError> {
    let n = kernel.size();
    let half = kernel.half_size() as isize;
    let weights = kernel.as_slice();

    let mut dst = vec![0.0; src.num_pixels()];

    parallel::par_iter_rows_indexed(&mut dst, src.cols(), |x, dst_row| {
        let x = x as isize;
        dst_row.iter_mut().enumerate().for_each(|(y, dst_pixel)| {
            let y = y as isize;
            let mut sum = 0.0;
            for kr in 0..n {
                let row = x - half + kr as isize;
                let kernel_row = &weights[kr * n..(kr + 1) * n];
                for (kc, &w) in kernel_row.iter().enumerate() {
                    let col = y - half + kc as isize;
                    let val: f64 = get_pixel(src, row, col).into();
                    sum += w * val;
                }
            }
            *dst_pixel = sum;
        });
    });

    Image::new(src.size(), dst)
}
