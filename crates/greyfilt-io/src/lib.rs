#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures
/// and unsupported color types.
pub mod error;

/// High-level image reading functions.
///
/// Reads any format supported by the `image` crate and converts it to greyscale.
/// See [`functional::read_image_any_gray8`].
pub mod functional;

/// Conversion of interleaved 8-bit buffers to greyscale.
pub mod gray;

/// PNG image encoding and decoding.
///
/// Read greyscale, grey+alpha, RGB(A) and palette PNG files as 8-bit
/// greyscale images, and write 8-bit greyscale PNG files.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::read_image_any_gray8;
pub use crate::png::{
    decode_image_png_gray8, encode_image_png_gray8, read_image_png_gray8, write_image_png_gray8,
};
