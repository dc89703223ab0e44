#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use greyfilt_image as image;

#[doc(inline)]
pub use greyfilt_imgproc as imgproc;

#[doc(inline)]
pub use greyfilt_io as io;
