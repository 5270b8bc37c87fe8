//! rasterkit-io - Image I/O for rasterkit
//!
//! Reads PNG files into packed [`PixelBuffer`]s and writes buffers back as
//! 8-bit RGB PNG. Decoding is enabled by the default `png-format` feature.
//!
//! # Examples
//!
//! ```no_run
//! use rasterkit_io::{read_image, write_image};
//!
//! let pix = read_image("input.png").unwrap();
//! write_image(&pix, "copy.png").unwrap();
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use log::debug;
use rasterkit_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns `IoError::UnsupportedFormat` if the file is not a PNG (or PNG
/// support is disabled), and `IoError::Io` / `IoError::DecodeError` for
/// read failures.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    debug!("read_image: {}", path.display());
    match detect_format(path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => read_png(BufReader::new(File::open(path)?)),
        format => Err(IoError::UnsupportedFormat(format!(
            "{}: {:?}",
            path.display(),
            format
        ))),
    }
}

/// Write an image to a file path as PNG.
///
/// # Errors
///
/// Returns `IoError::Io` if the file cannot be created and
/// `IoError::EncodeError` if encoding fails.
pub fn write_image<P: AsRef<Path>>(pix: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    debug!("write_image: {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory as PNG.
pub fn write_image_mem(pix: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_image_to(pix, &mut out)?;
    Ok(out)
}

#[cfg(feature = "png-format")]
fn write_image_to<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    write_png(pix, writer)
}

#[cfg(not(feature = "png-format"))]
fn write_image_to<W: Write>(_pix: &PixelBuffer, _writer: W) -> IoResult<()> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled".to_string(),
    ))
}
