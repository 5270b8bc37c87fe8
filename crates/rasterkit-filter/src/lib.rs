//! rasterkit-filter - Convolution and edge detection
//!
//! This crate provides the filtering core of rasterkit:
//!
//! - 3x3 kernel convolution with explicit per-region border handling
//!   ([`convolve`])
//! - Sobel gradient magnitude in two conventions and Canny-style
//!   non-maximum suppression ([`edge`])
//! - The legacy 2x2 red-channel box blur ([`blur`])
//!
//! Every operation borrows its input and returns a freshly allocated
//! buffer.

pub mod blur;
pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use blur::{legacy_box_blur, legacy_box_blur_len};
pub use convolve::{Region, convolve};
pub use edge::{
    CannyOptions, CenteredGradient, GradientDirection, NeighborMode, SobelGradient, canny_edge,
    renormalize_sobel, sobel_full, sobel_full_centered, suppress_non_maxima,
};
