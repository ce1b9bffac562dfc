//! Error types for the solar time estimator.

use thiserror::Error;

/// Failures a single estimation strategy can report.
///
/// None of these are fatal: the orchestrator logs them and moves on to the
/// next strategy, ending at the seasonal defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    /// A command-line value is not a number of the expected kind.
    #[error("Invalid {field}: {value:?} is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    /// Coordinates rejected by the solar position model.
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The sun does not cross the horizon on this day (polar day or night).
    #[error("No {event} on this day at the requested location")]
    NoSolarEvent { event: &'static str },

    /// The solar position library failed internally.
    #[error("Solar position calculation failed: {0}")]
    SolarLibrary(String),

    /// A minute offset too large to be added to a time of day.
    #[error("Offset of {0} minutes is out of range")]
    OffsetOutOfRange(i64),

    /// A computed time is NaN or infinite and has no clock representation.
    #[error("Computed time {0} hours is not a finite value")]
    NonFiniteTime(f64),
}
