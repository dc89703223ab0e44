use greyfilt_image::ImageError;

/// Horizontal Sobel weights, row-major.
const SOBEL_X: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];

/// Vertical Sobel weights, row-major.
const SOBEL_Y: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

/// A square correlation kernel.
///
/// The weights are stored row-major, the weight at `(row, col)` lives at
/// `row * size + col`. A kernel always holds exactly `size * size` weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a flat list of weights.
    ///
    /// The kernel size is inferred from the number of weights, which must be a
    /// perfect square. An odd size gives a well defined center; an even size is
    /// accepted but the window is then shifted towards the bottom-right.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelShape`] if the length is not a perfect square.
    ///
    /// # Example
    ///
    /// ```
    /// use greyfilt_imgproc::filter::kernels::Kernel;
    ///
    /// let kernel = Kernel::new(vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(kernel.size(), 3);
    ///
    /// assert!(Kernel::new(vec![1.0; 8]).is_err());
    /// ```
    pub fn new(data: Vec<f64>) -> Result<Self, ImageError> {
        let size = isqrt(data.len());
        if size * size != data.len() {
            return Err(ImageError::InvalidKernelShape(data.len()));
        }
        Ok(Self { size, data })
    }

    /// Number of rows (and columns) of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset from the kernel edge to its center, `(size - 1) / 2`.
    pub fn half_size(&self) -> usize {
        self.size.saturating_sub(1) / 2
    }

    /// The kernel weights, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of all the weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Create a box blur kernel.
///
/// Every weight equals `1 / kernel_size²`, so the kernel sums to one and the
/// correlation averages the neighborhood.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] for a zero kernel size.
pub fn box_blur_kernel_2d(kernel_size: usize) -> Result<Kernel, ImageError> {
    if kernel_size == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }
    let area = kernel_size * kernel_size;
    Ok(Kernel {
        size: kernel_size,
        data: vec![1.0 / area as f64; area],
    })
}

/// Create the pair of 3x3 Sobel kernels.
///
/// # Returns
///
/// The horizontal gradient kernel and the vertical gradient kernel.
pub fn sobel_kernel_2d() -> (Kernel, Kernel) {
    (
        Kernel {
            size: 3,
            data: SOBEL_X.to_vec(),
        },
        Kernel {
            size: 3,
            data: SOBEL_Y.to_vec(),
        },
    )
}
