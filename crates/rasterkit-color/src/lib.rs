//! rasterkit-color - Per-pixel color transforms
//!
//! Stateless maps over packed pixel buffers:
//!
//! - **Grayscale** ([`grayscale`]): max-channel gray conversion
//! - **CMYK** ([`cmyk`]): cyan, magenta, yellow and key channel extraction
//! - **Inversion** ([`invert`]): photographic negative
//! - **Key tone** ([`key_tone`]): two-channel tint chosen by darkness

pub mod cmyk;
pub mod error;
pub mod grayscale;
pub mod invert;
pub mod key_tone;

// Re-export core types
pub use rasterkit_core;

pub use error::{ColorError, ColorResult};

pub use cmyk::{CmykChannel, black, cyan, extract_channel, key_value, magenta, yellow};
pub use grayscale::{grayscale_by_max, max_channel};
pub use invert::{invert, invert_pixel};
pub use key_tone::{key_tone_filter, key_tone_pixel};
