//! Sunrise/sunset estimation.
//!
//! This module provides the solar time estimator used by the command-line tool:
//! - A precise path backed by a solar position library (feature `precise`)
//! - A closed-form approximate path with a seasonal sanity clamp
//! - An orchestrator that tries them in order and falls back to seasonal defaults

pub mod approximate;
pub mod error;
pub mod estimator;
#[cfg(feature = "precise")]
pub mod precise;
pub mod types;

pub use approximate::ApproximatePath;
pub use error::EstimateError;
pub use estimator::{Capabilities, Estimator, SolarStrategy, seasonal_default};
#[cfg(feature = "precise")]
pub use precise::PrecisePath;
pub use types::{
    ClockTime, Estimate, EstimationSource, GeoCoordinate, SolarRequest, SunTimes, TimeOffset,
};
