//! # geofuzz
//!
//! Adds bounded random noise to latitude/longitude columns in delimited
//! text files, keeping locations approximately correct while obscuring the
//! exact point. Useful for privacy-preserving sharing of location data.
//!
//! ## Usage
//!
//! ```bash
//! geofuzz input.csv output.csv --radius 0.05 --lat_col 0 --lon_col 1 --header
//! ```
//!
//! ## Modules
//!
//! - `diagnostics` - Injected sink for per-line warnings and errors
//! - `encoding` - Input/output encoding detection and conversion
//! - `error` - Row-level validation error taxonomy
//! - `fuzz` - Uniform-disk coordinate fuzzing
//! - `transform` - Line-oriented file transformation pipeline
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod fuzz;
pub mod transform;
