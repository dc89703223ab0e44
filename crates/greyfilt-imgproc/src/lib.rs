#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// edge replicating border handling.
pub mod border;

/// per-pixel image operations module.
pub mod core;

/// image filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;

/// rounding and clipping of real-valued images to 8 bits.
pub mod quantize;
