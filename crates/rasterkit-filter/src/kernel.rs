//! 3x3 convolution kernels
//!
//! A [`Kernel`] is an immutable 3x3 matrix of `f32` weights. Element
//! `[0][0]` lines up with the top-left neighbor of the pixel being
//! computed. No normalization factor is stored; scaling is the caller's
//! business.

use crate::{FilterError, FilterResult};

/// A 3x3 convolution kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Weights indexed `[row][col]`
    weights: [[f32; 3]; 3],
}

impl Kernel {
    /// Mean blur: all ones, unscaled.
    pub const MEAN_BLUR: Kernel = Kernel::new([[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]);

    /// Horizontal derivative (responds to vertical edges).
    pub const SOBEL_X: Kernel =
        Kernel::new([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]);

    /// Vertical derivative, positive when the image darkens downward.
    pub const SOBEL_Y: Kernel =
        Kernel::new([[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]]);

    /// Create a kernel from `[row][col]` weights.
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Kernel { weights }
    }

    /// Create a kernel from 9 row-major values.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidKernel` unless exactly 9 values are given.
    pub fn from_slice(data: &[f32]) -> FilterResult<Self> {
        if data.len() != 9 {
            return Err(FilterError::InvalidKernel(format!(
                "expected 9 values for a 3x3 kernel, got {}",
                data.len()
            )));
        }
        let mut weights = [[0.0f32; 3]; 3];
        for (i, &v) in data.iter().enumerate() {
            weights[i / 3][i % 3] = v;
        }
        Ok(Kernel { weights })
    }

    /// Weight at `[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.weights[row][col]
    }

    /// All weights, `[row][col]`.
    #[inline]
    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }

    /// Sum of all 9 weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().flatten().sum()
    }
}
