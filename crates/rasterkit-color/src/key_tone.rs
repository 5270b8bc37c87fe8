//! Key-tone tint filter
//!
//! Recolors each pixel by its darkness `k = 1 - max(r, g, b)` (normalized).
//! The byte `trunc(255 * k)` goes into two channels picked by `k`:
//!
//! | k | channels |
//! |---|---|
//! | `k > 0.5` | red + green |
//! | `0.2 < k <= 0.5` | red + blue |
//! | otherwise | green + blue |

use crate::cmyk::key_value;
use log::debug;
use rasterkit_core::{PixelBuffer, color};

const DARK_THRESHOLD: f32 = 0.5;
const MID_THRESHOLD: f32 = 0.2;

/// Tint one packed pixel.
pub fn key_tone_pixel(pixel: u32) -> u32 {
    let (r, g, b) = color::extract_rgb_normalized(pixel);
    let k = key_value(r, g, b);
    let level = ((255.0 * k) as u8) as u32;
    if k > DARK_THRESHOLD {
        level * 0x01_01_00
    } else if k > MID_THRESHOLD {
        level * 0x01_00_01
    } else {
        level * 0x00_01_01
    }
}

/// Tint every pixel by its darkness.
pub fn key_tone_filter(pix: &PixelBuffer) -> PixelBuffer {
    debug!("key_tone_filter: {}x{}", pix.width(), pix.height());
    pix.map_pixels(key_tone_pixel)
}
