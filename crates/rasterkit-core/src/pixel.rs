//! PixelBuffer - packed RGB image
//!
//! `PixelBuffer` is the boundary representation: one `u32` per pixel in
//! `0x00RRGGBB` layout, row-major, no padding and no alpha.
//!
//! # Examples
//!
//! ```
//! use rasterkit_core::PixelBuffer;
//!
//! let mut buf = PixelBuffer::new(4, 3).unwrap();
//! buf.set_pixel(1, 2, 0x00FF_8000).unwrap();
//! assert_eq!(buf.get_pixel(1, 2).unwrap(), 0x00FF_8000);
//! assert_eq!(buf.len(), 12);
//! ```

use crate::color;
use crate::error::{Error, Result, checked_len};

/// Packed-form image
///
/// # Memory Layout
///
/// The pixel at (x, y) is at index `y * width + x`. The high byte of every
/// element is zero; constructors discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a new black buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a buffer with every pixel set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: u32) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(PixelBuffer {
            width,
            height,
            data: vec![value & color::RGB_MASK; len],
        })
    }

    /// Create a buffer from packed pixel data.
    ///
    /// The high byte of each element (alpha in ARGB sources) is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or `data.len()` is not
    /// `width * height`.
    pub fn from_data(width: u32, height: u32, mut data: Vec<u32>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                width,
                height,
                expected,
                len: data.len(),
            });
        }
        for p in &mut data {
            *p &= color::RGB_MASK;
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Create a buffer from interleaved 8-bit RGB bytes (`[r, g, b, r, ...]`).
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if bytes.len() != expected * 3 {
            return Err(Error::DataLengthMismatch {
                width,
                height,
                expected: expected * 3,
                len: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| color::compose_rgb(c[0], c[1], c[2]))
            .collect();
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Assemble a buffer whose dimensions were already validated elsewhere.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        PixelBuffer {
            width,
            height,
            data,
        }
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

    /// Get the pixel at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u32> {
        let idx = self.index_of(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the pixel at (x, y); the high byte of `value` is dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        let idx = self.index_of(x, y)?;
        self.data[idx] = value & color::RGB_MASK;
        Ok(())
    }

    /// Get the packed pixel data.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Consume the buffer, returning its packed pixel data.
    pub fn into_data(self) -> Vec<u32> {
        self.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Interleaved 8-bit RGB bytes, the inverse of [`PixelBuffer::from_rgb_bytes`].
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for &p in &self.data {
            let (r, g, b) = color::extract_rgb(p);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    /// Apply `f` to every pixel, producing a new buffer of the same size.
    ///
    /// The high byte of each result is dropped.
    pub fn map_pixels<F>(&self, mut f: F) -> PixelBuffer
    where
        F: FnMut(u32) -> u32,
    {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|&p| f(p) & color::RGB_MASK)
                .collect(),
        }
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}
