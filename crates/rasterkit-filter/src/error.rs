//! Error types for rasterkit-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Image too small or inconsistent for the requested operation
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Width of the offending buffer
        width: u32,
        /// Height of the offending buffer
        height: u32,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Two buffers that must share a size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Smallest width and height a 3x3 neighborhood operation accepts.
pub(crate) const MIN_DIMENSION: u32 = 2;

/// Reject images narrower or shorter than [`MIN_DIMENSION`].
pub(crate) fn check_min_dimensions(width: u32, height: u32) -> FilterResult<()> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(FilterError::InvalidDimensions {
            width,
            height,
            reason: "width and height must both be at least 2",
        });
    }
    Ok(())
}

/// Reject a pair of buffers whose dimensions differ.
pub(crate) fn check_same_dimensions(
    expected: (u32, u32),
    actual: (u32, u32),
) -> FilterResult<()> {
    if expected != actual {
        return Err(FilterError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
