//! CMYK channel extraction
//!
//! Channels are computed from normalized RGB (`channel / 255`, in `f32`):
//!
//! - key: `k = 1 - max(r, g, b)`
//! - cyan: `(1 - r - k) / (1 - k)`
//! - magenta: `(1 - g - k) / (1 - k)`
//! - yellow: `(1 - b - k) / (1 - k)`
//!
//! Each channel is rendered as a packed image by truncating `255 * value`
//! to a byte and writing it into the two RGB channels that mix to that
//! ink (cyan = green + blue, magenta = red + blue, yellow = red + green);
//! the key channel is written as gray.
//!
//! Pure black (`k == 1`) has no cyan, magenta or yellow decomposition and
//! is reported as [`ColorError::DegenerateColorInput`].

use crate::{ColorError, ColorResult};
use log::debug;
use rasterkit_core::{PixelBuffer, color};

/// One channel of the CMYK decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmykChannel {
    Cyan,
    Magenta,
    Yellow,
    /// Black
    Key,
}

impl CmykChannel {
    /// Multiplier spreading a channel byte over the RGB positions that
    /// display it.
    pub fn rgb_multiplier(self) -> u32 {
        match self {
            CmykChannel::Cyan => 0x00_01_01,
            CmykChannel::Magenta => 0x01_00_01,
            CmykChannel::Yellow => 0x01_01_00,
            CmykChannel::Key => color::GRAY_REPLICATE,
        }
    }
}

/// Key (black) component of normalized RGB: `1 - max(r, g, b)`.
#[inline]
pub fn key_value(r: f32, g: f32, b: f32) -> f32 {
    1.0 - r.max(g).max(b)
}

/// Channel value of one pixel, in [0, 1].
///
/// Returns `None` for the cyan, magenta and yellow channels of pure black.
pub fn channel_value(pixel: u32, channel: CmykChannel) -> Option<f32> {
    let (r, g, b) = color::extract_rgb_normalized(pixel);
    let k = key_value(r, g, b);
    let primary = match channel {
        CmykChannel::Key => return Some(k),
        CmykChannel::Cyan => r,
        CmykChannel::Magenta => g,
        CmykChannel::Yellow => b,
    };
    if k == 1.0 {
        return None;
    }
    Some((1.0 - primary - k) / (1.0 - k))
}

/// Render one CMYK channel of every pixel.
///
/// # Errors
///
/// Returns `ColorError::DegenerateColorInput` with the index of the first
/// pure black pixel when extracting cyan, magenta or yellow. The key
/// channel never fails.
pub fn extract_channel(pix: &PixelBuffer, channel: CmykChannel) -> ColorResult<PixelBuffer> {
    debug!(
        "extract_channel({:?}): {}x{}",
        channel,
        pix.width(),
        pix.height()
    );
    let multiplier = channel.rgb_multiplier();
    let data = pix
        .data()
        .iter()
        .enumerate()
        .map(|(index, &p)| -> ColorResult<u32> {
            let value =
                channel_value(p, channel).ok_or(ColorError::DegenerateColorInput { index })?;
            Ok(((255.0 * value) as u8) as u32 * multiplier)
        })
        .collect::<ColorResult<Vec<u32>>>()?;
    Ok(PixelBuffer::from_data(pix.width(), pix.height(), data)?)
}

/// Cyan channel, rendered in green and blue.
pub fn cyan(pix: &PixelBuffer) -> ColorResult<PixelBuffer> {
    extract_channel(pix, CmykChannel::Cyan)
}

/// Magenta channel, rendered in red and blue.
pub fn magenta(pix: &PixelBuffer) -> ColorResult<PixelBuffer> {
    extract_channel(pix, CmykChannel::Magenta)
}

/// Yellow channel, rendered in red and green.
pub fn yellow(pix: &PixelBuffer) -> ColorResult<PixelBuffer> {
    extract_channel(pix, CmykChannel::Yellow)
}

/// Key (black) channel, rendered as gray.
pub fn black(pix: &PixelBuffer) -> PixelBuffer {
    debug!("black: {}x{}", pix.width(), pix.height());
    pix.map_pixels(|p| {
        let (r, g, b) = color::extract_rgb_normalized(p);
        color::compose_gray((255.0 * key_value(r, g, b)) as u8)
    })
}
