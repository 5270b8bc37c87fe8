//! Legacy 2x2 box blur
//!
//! Averages the red channel of each pixel with its right, lower and
//! lower-right neighbors, addressed by linear offset. The output holds
//! `width * height - width - height` pixels and output `i` corresponds to
//! input `i`: the tail of the image is dropped and positions are not
//! remapped, so the result no longer lines up with image rows.

use crate::FilterResult;
use crate::error::check_min_dimensions;
use log::debug;
use rasterkit_core::{PixelBuffer, color};

const RED_MASK: u32 = 0x00FF_0000;

/// Number of pixels produced by [`legacy_box_blur`] for a `width` x `height` image.
pub fn legacy_box_blur_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize).saturating_sub(width as usize + height as usize)
}

/// Blur a gray packed image by averaging 2x2 blocks of the red channel.
///
/// Each output pixel is `((r(i) + r(i+1) + r(i+w) + r(i+w+1)) / 4)`
/// replicated into all three channels.
///
/// # Errors
///
/// Returns `FilterError::InvalidDimensions` if width or height is below 2.
pub fn legacy_box_blur(pix: &PixelBuffer) -> FilterResult<Vec<u32>> {
    let (w, h) = pix.dimensions();
    check_min_dimensions(w, h)?;
    debug!("legacy_box_blur: {}x{}", w, h);

    let width = w as usize;
    let data = pix.data();
    let out = (0..legacy_box_blur_len(w, h))
        .map(|i| {
            let sum = (data[i] & RED_MASK)
                + (data[i + 1] & RED_MASK)
                + (data[i + width] & RED_MASK)
                + (data[i + width + 1] & RED_MASK);
            // 16 bits down to the red byte, 2 more to divide by 4
            (sum >> 18) * color::GRAY_REPLICATE
        })
        .collect();
    Ok(out)
}
