//! Filter operations
//!
//! This module provides the correlation engine and the greyscale filters built on it.

/// Filter kernels
pub mod kernels;

/// Correlation of an image with a square kernel
mod correlation;
pub use correlation::*;

/// Filter operations
mod ops;
pub use ops::*;
