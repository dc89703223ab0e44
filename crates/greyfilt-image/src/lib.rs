#![deny(missing_docs)]
//! Greyscale image types and the errors raised when building them

/// image representation for greyscale filtering.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, PixelType};
