//! # Followsun
//!
//! Offline sunrise/sunset estimation for display brightness and theme scheduling.
//!
//! Given a latitude and longitude, followsun prints today's local sunrise and
//! sunset as `HH:MM`. It prefers a library-grade solar position model, falls back
//! to a closed-form approximation, and finally to seasonal defaults, so a usable
//! pair of times is always produced.
//!
//! ## Architecture
//!
//! - **args**: Command-line parsing
//! - **clock**: Clock source abstraction and per-run clock readings
//! - **constants**: Fallback tables, numeric limits and output literals
//! - **logger**: Diagnostic logging to standard error
//! - **solar**: The estimation strategies and their orchestrator
//! - **utils**: Fractional-hour normalisation and formatting

pub mod args;
pub mod clock;
pub mod constants;
pub mod logger;
pub mod solar;
pub mod utils;

// Re-export important types for easier access
pub use clock::{ClockReading, ClockSource, FixedClock, SystemClock};
pub use logger::{Log, LogLevel};
pub use solar::{Capabilities, Estimate, EstimationSource, Estimator, SolarRequest};
pub use utils::format_time;
