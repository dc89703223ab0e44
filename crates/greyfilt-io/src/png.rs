use std::{fs, io::Read, path::Path};

use greyfilt_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};

use crate::{error::IoError, gray};

/// Read a PNG image as an 8-bit greyscale image.
///
/// Greyscale sources are passed through, grey+alpha sources keep the grey
/// channel and RGB(A) sources are converted with the luma weights
/// `0.299, 0.587, 0.114`. Palette and low bit depth files are expanded first.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedColorType`] for 16-bit files.
pub fn read_image_png_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    match file_path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case("png") => {}
        _ => return Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }

    let file = fs::File::open(file_path)?;
    decode_png_impl(file)
}

/// Decodes a PNG image from raw bytes as an 8-bit greyscale image.
///
/// Applies the same greyscale conversion as [`read_image_png_gray8`].
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the png file.
pub fn decode_image_png_gray8(bytes: &[u8]) -> Result<Image<u8>, IoError> {
    decode_png_impl(bytes)
}

/// Writes the given greyscale image as an 8-bit PNG to the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The greyscale image.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8>,
) -> Result<(), IoError> {
    let file = fs::File::create(file_path)?;
    write_png_impl(file, image.as_slice(), image.size())
}

/// Encodes the given greyscale image as 8-bit PNG bytes.
///
/// # Arguments
///
/// * `image` - The greyscale image.
///
/// # Returns
///
/// The bytes of the png file.
pub fn encode_image_png_gray8(image: &Image<u8>) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::new();
    write_png_impl(&mut buf, image.as_slice(), image.size())?;
    Ok(buf)
}

// utility function to decode a png stream into greyscale
fn decode_png_impl(r: impl Read) -> Result<Image<u8>, IoError> {
    let mut decoder = Decoder::new(r);
    decoder.set_transformations(Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    log::debug!(
        "decoded png {}x{} {:?} {:?}",
        size.width,
        size.height,
        info.color_type,
        info.bit_depth
    );

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedColorType(format!(
            "{:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    let image = match info.color_type {
        ColorType::Grayscale => Image::new(size, buf)?,
        ColorType::GrayscaleAlpha => gray::gray_from_luma_alpha8(&buf, size)?,
        ColorType::Rgb => gray::gray_from_rgb8(&buf, size)?,
        ColorType::Rgba => gray::gray_from_rgba8(&buf, size)?,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedColorType(format!(
                "{:?}",
                info.color_type
            )))
        }
    };

    Ok(image)
}

fn write_png_impl(
    w: impl std::io::Write,
    image_data: &[u8],
    image_size: ImageSize,
) -> Result<(), IoError> {
    let mut encoder = Encoder::new(w, image_size.width as u32, image_size.height as u32);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    log::debug!(
        "encoded png {}x{} Grayscale Eight",
        image_size.width,
        image_size.height
    );

    Ok(())
}
