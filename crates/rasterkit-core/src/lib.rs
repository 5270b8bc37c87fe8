//! rasterkit core - Pixel buffers for image filtering
//!
//! This crate provides the two buffer representations shared by every
//! rasterkit crate:
//!
//! - [`PixelBuffer`] - packed `0x00RRGGBB` integers, one per pixel
//! - [`FloatBuffer`] - one `f32` intensity per pixel, nominally in [0, 1]
//!
//! Both are row-major (top-to-bottom, left-to-right) with explicit width and
//! height, and always satisfy `len == width * height`.
//!
//! The normalization boundary between them lives on [`FloatBuffer`]:
//! [`FloatBuffer::normalize`] reads the low (blue) byte of each packed
//! pixel, and [`FloatBuffer::to_gray_pixels`] replicates a byte back into
//! all three channels.

pub mod error;
pub mod float;
pub mod pixel;

pub use error::{Error, Result};
pub use float::FloatBuffer;
pub use pixel::PixelBuffer;

/// Channel helpers for packed pixels.
///
/// # Pixel format
///
/// Packed pixels are stored as `0x00RRGGBB` (red in bits 16..24, blue in
/// the low byte). The high byte carries no alpha and is always zero in a
/// [`PixelBuffer`].
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Mask covering the three color channels.
    pub const RGB_MASK: u32 = 0x00FF_FFFF;

    /// Multiplier replicating one byte into all three channels.
    pub const GRAY_REPLICATE: u32 = 0x01_01_01;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose a gray pixel with `value` in every channel.
    #[inline]
    pub fn compose_gray(value: u8) -> u32 {
        GRAY_REPLICATE * value as u32
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGB values normalized to [0, 1].
    #[inline]
    pub fn extract_rgb_normalized(pixel: u32) -> (f32, f32, f32) {
        let (r, g, b) = extract_rgb(pixel);
        (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

}
