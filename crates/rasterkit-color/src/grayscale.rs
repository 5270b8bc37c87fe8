//! Max-channel grayscale conversion

use log::debug;
use rasterkit_core::{PixelBuffer, color};

/// Largest of the three channels of a packed pixel.
#[inline]
pub fn max_channel(pixel: u32) -> u8 {
    let (r, g, b) = color::extract_rgb(pixel);
    r.max(g).max(b)
}

/// Convert to gray using the brightest channel of each pixel.
///
/// Every output pixel is `0x010101 * max(r, g, b)`.
pub fn grayscale_by_max(pix: &PixelBuffer) -> PixelBuffer {
    debug!("grayscale_by_max: {}x{}", pix.width(), pix.height());
    pix.map_pixels(|p| color::compose_gray(max_channel(p)))
}
