//! FloatBuffer - normalized single-channel image
//!
//! `FloatBuffer` is the working representation for convolution: one `f32`
//! per pixel. Normalized buffers hold values in [0, 1]; intermediate
//! buffers (raw gradient responses) may hold any finite value.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::{FloatBuffer, PixelBuffer};
//!
//! let pixels = PixelBuffer::from_data(2, 1, vec![0x0000_0000, 0x00FF_FFFF]).unwrap();
//! let norm = FloatBuffer::normalize(&pixels);
//! assert_eq!(norm.data(), &[0.0, 1.0]);
//! assert_eq!(norm.to_gray_pixels(), pixels);
//! ```

use crate::color;
use crate::error::{Error, Result, checked_len};
use crate::pixel::PixelBuffer;

/// Floating-point image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FloatBuffer {
    /// Create a new FloatBuffer with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new FloatBuffer with all pixels set to `value`
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(FloatBuffer {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Create a FloatBuffer from raw data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                width,
                height,
                expected,
                len: data.len(),
            });
        }
        Ok(FloatBuffer {
            width,
            height,
            data,
        })
    }

    /// Normalize a packed buffer to [0, 1].
    ///
    /// Only the low (blue) byte of each pixel is read: `(p & 0xFF) / 255`.
    /// For gray pixels every channel holds the same byte, so this is the
    /// gray level.
    pub fn normalize(pixels: &PixelBuffer) -> Self {
        FloatBuffer {
            width: pixels.width(),
            height: pixels.height(),
            data: pixels
                .data()
                .iter()
                .map(|&p| (p & 0xFF) as f32 / 255.0)
                .collect(),
        }
    }

    /// Denormalize to a gray packed buffer.
    ///
    /// Each value maps to `0x010101 * trunc(255 * v)`. The byte is clamped
    /// to [0, 255]; NaN maps to black.
    pub fn to_gray_pixels(&self) -> PixelBuffer {
        let data = self
            .data
            .iter()
            .map(|&v| color::compose_gray((255.0 * v) as u8))
            .collect();
        PixelBuffer::from_parts(self.width, self.height, data)
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed buffer; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the pixel data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consume the buffer, returning its pixel data.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Get one row of values.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[f32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Apply `f` to every value, producing a new buffer of the same size.
    pub fn map<F>(&self, f: F) -> FloatBuffer
    where
        F: FnMut(&f32) -> f32,
    {
        FloatBuffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Combine two same-sized buffers element by element.
    ///
    /// # Errors
    ///
    /// Returns `Error::DataLengthMismatch` if the dimensions differ.
    pub fn zip_map<F>(&self, other: &FloatBuffer, mut f: F) -> Result<FloatBuffer>
    where
        F: FnMut(f32, f32) -> f32,
    {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DataLengthMismatch {
                width: self.width,
                height: self.height,
                expected: self.data.len(),
                len: other.data.len(),
            });
        }
        Ok(FloatBuffer {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Smallest non-NaN value, if any.
    pub fn min_value(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f32::min)
    }

    /// Largest non-NaN value, if any.
    pub fn max_value(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f32::max)
    }

    /// Count of strictly positive values.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0.0).count()
    }
}
