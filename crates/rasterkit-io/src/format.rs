//! Image format detection
//!
//! Sniffs the file signature so a non-PNG input fails with
//! `UnsupportedFormat` instead of a decoder error.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PNG: 89 50 4E 47 0D 0A 1A 0A
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Image formats recognized by signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Unknown,
}

impl ImageFormat {
    /// Conventional file extension, if any.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            ImageFormat::Png => Some("png"),
            ImageFormat::Unknown => None,
        }
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let mut filled = 0;
    while filled < header.len() {
        let n = file.read(&mut header[filled..]).map_err(IoError::Io)?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(detect_format_from_bytes(&header[..filled]))
}

/// Detect image format from the leading bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> ImageFormat {
    if data.starts_with(PNG_MAGIC) {
        ImageFormat::Png
    } else {
        ImageFormat::Unknown
    }
}
