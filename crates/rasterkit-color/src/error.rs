//! Error types for rasterkit-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// A pure black pixel (`k == 1`) makes a CMY channel divide by zero
    #[error("degenerate color input at pixel {index}: pure black has no CMY decomposition")]
    DegenerateColorInput {
        /// Row-major index of the offending pixel
        index: usize,
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
