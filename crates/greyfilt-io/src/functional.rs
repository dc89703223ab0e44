use std::path::Path;

use greyfilt_image::{Image, ImageSize};

use crate::{error::IoError, gray};

/// Reads an image of any format supported by the `image` crate as 8-bit greyscale.
///
/// The format is guessed from the file content. Greyscale sources are passed
/// through, grey+alpha keeps the grey channel and RGB(A) sources are converted
/// with the luma weights `0.299, 0.587, 0.114`.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedColorType`] for 16-bit and floating point sources.
pub fn read_image_any_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!(
        "decoded {} {}x{} {:?}",
        file_path.display(),
        size.width,
        size.height,
        img.color()
    );

    let image = match img {
        image::DynamicImage::ImageLuma8(buf) => Image::new(size, buf.into_raw())?,
        image::DynamicImage::ImageLumaA8(buf) => gray::gray_from_luma_alpha8(buf.as_raw(), size)?,
        image::DynamicImage::ImageRgb8(buf) => gray::gray_from_rgb8(buf.as_raw(), size)?,
        image::DynamicImage::ImageRgba8(buf) => gray::gray_from_rgba8(buf.as_raw(), size)?,
        other => {
            return Err(IoError::UnsupportedColorType(format!(
                "{:?}",
                other.color()
            )))
        }
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::write_image_png_gray8;

    #[test]
    fn read_any_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let image = Image::new([5, 3].into(), (0..15).map(|x| x as u8 * 17).collect())?;
        write_image_png_gray8(&file_path, &image)?;

        let image_back = read_image_any_gray8(&file_path)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn read_any_rgb_converts_to_gray() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");

        let rgb = image::RgbImage::from_raw(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255])
            .ok_or_else(|| IoError::PngEncodingError("bad buffer".to_string()))?;
        rgb.save(&file_path)?;

        let gray = read_image_any_gray8(&file_path)?;
        assert_eq!(gray.as_slice(), &[76, 150, 29]);
        Ok(())
    }

    #[test]
    fn read_any_16bit_unsupported() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray16.png");

        let img = image::ImageBuffer::<image::Luma<u16>, _>::from_raw(2, 1, vec![0u16, 65535])
            .ok_or_else(|| IoError::PngEncodingError("bad buffer".to_string()))?;
        img.save(&file_path)?;

        let res = read_image_any_gray8(&file_path);
        assert!(matches!(res, Err(IoError::UnsupportedColorType(_))));
        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let res = read_image_any_gray8("does/not/exist.bmp");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
