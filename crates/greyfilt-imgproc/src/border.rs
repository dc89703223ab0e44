use greyfilt_image::Image;

/// Maps a possibly out-of-range coordinate to a valid index in `[0, len)` by replicating the edge.
///
/// Coordinates below zero map to the first index and coordinates at or past `len`
/// map to the last one, so samples outside the image take the value of the
/// nearest edge pixel.
///
/// Example: `...d c b a | a a a a...`
///
/// For an empty dimension there is no valid index and `0` is returned.
///
/// # Arguments
///
/// * `len` - The extent of the dimension (image height or width).
/// * `coord` - The requested coordinate.
///
/// # Example
///
/// ```
/// use greyfilt_imgproc::border::resolve_index;
///
/// assert_eq!(resolve_index(5, -3), 0);
/// assert_eq!(resolve_index(5, 2), 2);
/// assert_eq!(resolve_index(5, 9), 4);
/// ```
#[inline]
pub fn resolve_index(len: usize, coord: isize) -> usize {
    if len == 0 || coord < 0 {
        return 0;
    }
    (coord as usize).min(len - 1)
}

/// Read the pixel at `(row, col)`, replicating the edge for out-of-range coordinates.
///
/// The row is resolved against the image height and the column against the
/// width, independently.
///
/// PRECONDITION: the image is not empty.
///
/// # Example
///
/// ```
/// use greyfilt_image::Image;
/// use greyfilt_imgproc::border::get_pixel;
///
/// let image = Image::new([2, 2].into(), vec![1u8, 2, 3, 4]).unwrap();
///
/// assert_eq!(get_pixel(&image, -1, -1), 1);
/// assert_eq!(get_pixel(&image, 0, 5), 2);
/// assert_eq!(get_pixel(&image, 7, 1), 4);
/// ```
#[inline]
pub fn get_pixel<T: Copy>(image: &Image<T>, row: isize, col: isize) -> T {
    let row = resolve_index(image.rows(), row);
    let col = resolve_index(image.cols(), col);
    image.as_slice()[row * image.cols() + col]
}
