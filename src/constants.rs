//! Application constants and default values for followsun.
//!
//! This module contains the fallback times, numeric limits, and output
//! literals used throughout the estimator and the command-line front end.

// ═══ Approximate Path Constants ═══
// Values of the closed-form sunrise/sunset estimate

/// Amplitude of the solar declination approximation (radians).
pub const DECLINATION_AMPLITUDE: f64 = 0.409;
/// Ordinal day used as the spring equinox reference.
pub const EQUINOX_DAY_OF_YEAR: f64 = 80.0;
/// Days per year used by the declination approximation (leap years are not special-cased).
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Horizon altitude accounting for refraction and the solar disk (degrees).
pub const HORIZON_CORRECTION_DEGREES: f64 = -0.83;

// ═══ Sanity Clamp ═══
// A day length outside this window means a polar or degenerate computation

pub const MINIMUM_DAY_LENGTH_HOURS: f64 = 4.0;
pub const MAXIMUM_DAY_LENGTH_HOURS: f64 = 20.0;

// Days of year (inclusive) that use the summer override table
pub const SUMMER_OVERRIDE_FIRST_DAY: u32 = 80;
pub const SUMMER_OVERRIDE_LAST_DAY: u32 = 265;

pub const SUMMER_OVERRIDE_SUNRISE_HOURS: f64 = 5.5; // 05:30
pub const SUMMER_OVERRIDE_SUNSET_HOURS: f64 = 21.0; // 21:00
pub const WINTER_OVERRIDE_SUNRISE_HOURS: f64 = 7.0; // 07:00
pub const WINTER_OVERRIDE_SUNSET_HOURS: f64 = 18.0; // 18:00

// ═══ Seasonal Defaults ═══
// Used by the orchestrator when every strategy failed

// Months (inclusive) that use the summer defaults
pub const SUMMER_DEFAULT_FIRST_MONTH: u32 = 3;
pub const SUMMER_DEFAULT_LAST_MONTH: u32 = 10;

pub const SUMMER_DEFAULT_SUNRISE: (u8, u8) = (6, 30);
pub const SUMMER_DEFAULT_SUNSET: (u8, u8) = (20, 0);
pub const WINTER_DEFAULT_SUNRISE: (u8, u8) = (7, 30);
pub const WINTER_DEFAULT_SUNSET: (u8, u8) = (16, 30);

// ═══ Command Line Output ═══

pub const PRECISE_TAG: &str = "ASTRAL";
pub const APPROXIMATE_TAG: &str = "CALCULATED";

/// Printed verbatim when a fault escapes the estimator entirely.
pub const FAULT_DEFAULT_LINE: &str = "DEFAULT 06:30 19:30";

pub const USAGE: &str = "Usage: followsun LATITUDE LONGITUDE [SUNRISE_OFFSET SUNSET_OFFSET]";

/// Exit status for a malformed invocation.
pub const USAGE_EXIT_CODE: i32 = 1;
