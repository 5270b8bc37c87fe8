//! rasterkit - Raster image filtering for Rust
//!
//! Small image-filtering toolkit built around a bordered 3x3 convolution:
//!
//! - PNG read/write into packed RGB buffers
//! - Normalization between packed pixels and `f32` gray buffers
//! - Mean blur, Sobel gradients and Canny-style edge thinning
//! - Per-pixel color transforms (grayscale, CMYK channels, inversion)
//!
//! # Example
//!
//! ```
//! use rasterkit::filter::{CannyOptions, canny_edge};
//! use rasterkit::{FloatBuffer, PixelBuffer};
//!
//! // Dark left half, bright right half
//! let data = (0..36).map(|i| if i % 6 < 3 { 0 } else { 0x00FF_FFFF }).collect();
//! let pixels = PixelBuffer::from_data(6, 6, data).unwrap();
//!
//! let edges = canny_edge(&FloatBuffer::normalize(&pixels), &CannyOptions::default()).unwrap();
//! assert!(edges.get_pixel(2, 3).unwrap() > 0.5);
//! assert_eq!(edges.get_pixel(0, 3).unwrap(), 0.0);
//!
//! let out = edges.to_gray_pixels();
//! assert_eq!(out.dimensions(), (6, 6));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Channel packing helpers; `color` below names the transform crate
pub use rasterkit_core::color as channel;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
pub use rasterkit_io as io;
