//! PNG image format support
//!
//! Every PNG layout is decoded into a packed [`PixelBuffer`]. Palettes and
//! sub-byte gray depths are expanded by the decoder and 16-bit samples are
//! stripped to their high byte. Gray is replicated into all three
//! channels and alpha is discarded. Output is always 8-bit RGB.

use crate::{IoError, IoResult};
use log::{debug, trace};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use rasterkit_core::{PixelBuffer, color};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    trace!(
        "read_png: {}x{} source {:?} {:?}",
        width, height, info.color_type, info.bit_depth
    );

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }
    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..][..width as usize * samples];
        pixels.extend(row.chunks_exact(samples).map(|s| match samples {
            1 | 2 => color::compose_gray(s[0]),
            _ => color::compose_rgb(s[0], s[1], s[2]),
        }));
    }

    debug!("read_png: decoded {}x{}", width, height);
    Ok(PixelBuffer::from_data(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let (width, height) = pix.dimensions();
    debug!("write_png: {}x{}", width, height);

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&pix.to_rgb_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
