//! rasterkit-test - Regression test framework for rasterkit
//!
//! Regression tests run in one of three modes:
//!
//! - **Generate**: write golden files for later comparison
//! - **Compare**: compare results with golden files (default)
//! - **Display**: run checks without touching golden files
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("convolve");
//! let input = synthetic::impulse(3, 3).unwrap();
//! rp.compare_values(9.0, input.data().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    // rasterkit-test is at crates/rasterkit-test
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
