//! Photographic negative

use log::debug;
use rasterkit_core::{PixelBuffer, color};

/// Invert one packed pixel: `0xFFFFFF - p`.
#[inline]
pub fn invert_pixel(pixel: u32) -> u32 {
    color::RGB_MASK - (pixel & color::RGB_MASK)
}

/// Invert every pixel. Applying it twice returns the original buffer.
pub fn invert(pix: &PixelBuffer) -> PixelBuffer {
    debug!("invert: {}x{}", pix.width(), pix.height());
    pix.map_pixels(invert_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_pixel() {
        assert_eq!(invert_pixel(0), 0x00FF_FFFF);
        assert_eq!(invert_pixel(0x00FF_FFFF), 0);
        assert_eq!(invert_pixel(0x0012_3456), 0x00ED_CBA9);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let data: Vec<u32> = (0..64u32).map(|i| i.wrapping_mul(0x0003_9A7F) & 0xFF_FFFF).collect();
        let pix = PixelBuffer::from_data(8, 8, data).unwrap();
        assert_eq!(invert(&invert(&pix)), pix);
    }
}
