/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel buffer length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two images that must agree in size do not.
    #[error("Image size ({0}x{1}) does not match ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the kernel weights do not form a square matrix.
    #[error("Kernel length ({0}) is not a perfect square")]
    InvalidKernelShape(usize),

    /// Error when a kernel size is not usable by the requested filter.
    #[error("Invalid kernel size {0}")]
    InvalidKernelSize(usize),
}
