use greyfilt_image::{Image, ImageError, ImageSize};
use greyfilt_imgproc::{
    filter::{box_blur, correlate, invert, kernels::Kernel, sharpen, sobel_edges},
    quantize::round_and_clip,
};

const CENTER: usize = 5;

/// 11x11 black image with a single 255 pixel at the center.
fn centered_pixel() -> Result<Image<u8>, ImageError> {
    let size = ImageSize {
        width: 11,
        height: 11,
    };
    let mut data = vec![0u8; size.width * size.height];
    data[CENTER * size.width + CENTER] = 255;
    Image::new(size, data)
}

/// Deterministic pseudo random image.
fn noise(width: usize, height: usize) -> Result<Image<u8>, ImageError> {
    let mut state = 0x2545_f491u32;
    let data = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    Image::new(ImageSize { width, height }, data)
}

/// Expected image for a centered block of `value` of side `n`, zero elsewhere.
fn centered_block(n: usize, value: u8) -> Vec<u8> {
    let half = n / 2;
    let mut expected = vec![0u8; 11 * 11];
    for r in CENTER - half..=CENTER + half {
        for c in CENTER - half..=CENTER + half {
            expected[r * 11 + c] = value;
        }
    }
    expected
}

#[test]
fn filters_do_not_mutate_input() -> Result<(), ImageError> {
    let img = noise(13, 7)?;
    let before = img.clone();

    let _ = invert(&img)?;
    let _ = box_blur(&img, 3)?;
    let _ = sharpen(&img, 5)?;
    let _ = sobel_edges(&img)?;
    let _ = correlate(&img, &Kernel::new(vec![0.5; 9])?)?;

    assert_eq!(img, before);
    Ok(())
}

#[test]
fn invert_is_an_involution() -> Result<(), ImageError> {
    for (w, h) in [(1, 1), (4, 9), (16, 3)] {
        let img = noise(w, h)?;
        assert_eq!(invert(&invert(&img)?)?, img);
    }
    Ok(())
}

#[test]
fn box_blur_of_size_one_is_identity() -> Result<(), ImageError> {
    let img = noise(10, 6)?;
    assert_eq!(box_blur(&img, 1)?, img);

    let real = Image::new([3, 1].into(), vec![-4.2, 17.5, 300.0])?;
    assert_eq!(box_blur(&real, 1)?, round_and_clip(&real)?);
    Ok(())
}

#[test]
fn uniform_image_stays_uniform() -> Result<(), ImageError> {
    for value in [0u8, 1, 37, 128, 254, 255] {
        let img = Image::<u8>::from_size_val([7, 5].into(), value)?;

        for n in [1, 3, 5, 9] {
            let blurred = box_blur(&img, n)?;
            assert!(blurred.as_slice().iter().all(|&p| p == value), "box {n}");

            let sharpened = sharpen(&img, n)?;
            assert!(sharpened.as_slice().iter().all(|&p| p == value), "sharpen {n}");
        }

        // any kernel summing to one, even asymmetric
        let kernel = Kernel::new(vec![0.5, -0.25, 0.0, 0.25, 0.1, 0.1, 0.1, 0.1, 0.1])?;
        let correlated = round_and_clip(&correlate(&img, &kernel)?)?;
        assert!(correlated.as_slice().iter().all(|&p| p == value));
    }
    Ok(())
}

#[test]
fn black_image_stays_black() -> Result<(), ImageError> {
    for (w, h) in [(1, 1), (2, 9), (11, 11)] {
        let img = Image::<u8>::from_size_val([w, h].into(), 0)?;
        for n in [1, 2, 3, 4, 7, 15] {
            assert_eq!(box_blur(&img, n)?, img);
        }
    }
    Ok(())
}

#[test]
fn centered_pixel_box_blur() -> Result<(), ImageError> {
    let img = centered_pixel()?;

    let blurred = box_blur(&img, 3)?;
    assert_eq!(blurred.as_slice(), centered_block(3, 28).as_slice());

    let blurred = box_blur(&img, 5)?;
    assert_eq!(blurred.as_slice(), centered_block(5, 10).as_slice());
    Ok(())
}

#[test]
fn centered_pixel_sobel_edges() -> Result<(), ImageError> {
    let img = centered_pixel()?;
    let edges = sobel_edges(&img)?;

    let mut expected = centered_block(3, 255);
    expected[CENTER * 11 + CENTER] = 0;

    assert_eq!(edges.as_slice(), expected.as_slice());
    Ok(())
}

#[test]
fn centered_pixel_sharpen() -> Result<(), ImageError> {
    let img = centered_pixel()?;
    let sharpened = sharpen(&img, 3)?;

    // 2 * 255 - 255 / 9 saturates at the center, the halo goes negative
    let mut expected = vec![0u8; 11 * 11];
    expected[CENTER * 11 + CENTER] = 255;

    assert_eq!(sharpened.as_slice(), expected.as_slice());
    Ok(())
}

#[test]
fn filters_keep_size_on_degenerate_images() -> Result<(), ImageError> {
    let empty = Image::<u8>::new([0, 0].into(), vec![])?;
    assert_eq!(box_blur(&empty, 3)?.size(), empty.size());
    assert_eq!(sobel_edges(&empty)?.size(), empty.size());

    let column = Image::new([1, 4].into(), vec![0u8, 40, 80, 120])?;
    let blurred = box_blur(&column, 3)?;
    assert_eq!(blurred.as_slice(), &[13, 40, 80, 107]);
    Ok(())
}
