//! Deterministic fixture images
//!
//! The repository ships no binary fixtures; regression tests build their
//! inputs here. Every builder fails with the core dimension error for a
//! zero width or height.

use rasterkit_core::{FloatBuffer, PixelBuffer, Result, color};

/// Float image of zeros with a single 1.0 at the center pixel.
pub fn impulse(width: u32, height: u32) -> Result<FloatBuffer> {
    let mut data = FloatBuffer::new(width, height)?.into_data();
    data[(height / 2) as usize * width as usize + (width / 2) as usize] = 1.0;
    FloatBuffer::from_data(width, height, data)
}

/// Float image with every pixel set to `value`.
pub fn uniform(width: u32, height: u32, value: f32) -> Result<FloatBuffer> {
    FloatBuffer::new_with_value(width, height, value)
}

/// Gray packed image: `low` left of column `edge`, `high` from it on.
pub fn vertical_step(width: u32, height: u32, edge: u32, low: u8, high: u8) -> Result<PixelBuffer> {
    let data = (0..height)
        .flat_map(|_| (0..width).map(|x| color::compose_gray(if x < edge { low } else { high })))
        .collect();
    PixelBuffer::from_data(width, height, data)
}

/// Gray packed image ramping from 0 at the left to 255 at the right.
pub fn horizontal_ramp(width: u32, height: u32) -> Result<PixelBuffer> {
    let span = width.saturating_sub(1).max(1);
    let data = (0..height)
        .flat_map(|_| (0..width).map(|x| color::compose_gray((x * 255 / span) as u8)))
        .collect();
    PixelBuffer::from_data(width, height, data)
}

/// Primary and secondary colors plus black, white and mid gray, one per
/// column in a single row.
pub const SWATCH_COLORS: [u32; 9] = [
    0x00FF_0000,
    0x0000_FF00,
    0x0000_00FF,
    0x0000_FFFF,
    0x00FF_00FF,
    0x00FF_FF00,
    0x0000_0000,
    0x00FF_FFFF,
    0x0080_8080,
];

/// One row of [`SWATCH_COLORS`], repeated `height` times.
pub fn rgb_swatches(height: u32) -> Result<PixelBuffer> {
    let width = SWATCH_COLORS.len() as u32;
    let data = (0..height).flat_map(|_| SWATCH_COLORS).collect();
    PixelBuffer::from_data(width, height, data)
}
