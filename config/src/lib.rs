//! # Config Crate
//!
//! Centralized configuration constants for the collision prism workspace.
//! All tolerances used by the geometry crates are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, ROUND_TRIP_TOLERANCE, UNIT_LENGTH_TOLERANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, UNIT_LENGTH_TOLERANCE);
//!
//! let reconstructed: f64 = 2.0004;
//! assert!((reconstructed - 2.0).abs() < ROUND_TRIP_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain `std` so every crate can depend on it
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
