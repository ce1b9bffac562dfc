//! Utility functions for fractional-hour arithmetic.
//!
//! The approximate estimator works in hours since local midnight as `f64`.
//! These helpers wrap such values into a single day and render them as
//! `HH:MM` clock strings.

use crate::solar::{ClockTime, EstimateError};

/// Wrap a fractional hour value into `[0, 24)`.
///
/// # Returns
/// The equivalent hour within one day, or `None` for NaN and infinities.
///
/// # Examples
/// ```
/// use followsun::utils::normalize_hours;
/// assert_eq!(normalize_hours(25.5), Some(1.5));
/// assert_eq!(normalize_hours(-1.25), Some(22.75));
/// assert_eq!(normalize_hours(f64::NAN), None);
/// ```
pub fn normalize_hours(hours: f64) -> Option<f64> {
    if !hours.is_finite() {
        return None;
    }
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if wrapped >= 24.0 {
        Some(wrapped - 24.0)
    } else {
        Some(wrapped)
    }
}

/// Split fractional hours into whole hour and minute, truncating seconds.
///
/// # Errors
/// [`EstimateError::NonFiniteTime`] if `hours` is NaN or infinite.
pub fn hours_to_clock(hours: f64) -> Result<(u8, u8), EstimateError> {
    let wrapped = normalize_hours(hours).ok_or(EstimateError::NonFiniteTime(hours))?;
    let hour = wrapped.floor();
    let minute = ((wrapped - hour) * 60.0).floor();
    // wrapped < 24 and the fraction < 1, so both casts stay in range
    Ok((hour as u8, minute as u8))
}

/// Format fractional hours as a zero-padded 24-hour `HH:MM` string.
///
/// # Examples
/// ```
/// use followsun::utils::format_time;
/// assert_eq!(format_time(25.5).unwrap(), "01:30");
/// assert_eq!(format_time(-1.25).unwrap(), "22:45");
/// ```
pub fn format_time(hours: f64) -> Result<String, EstimateError> {
    Ok(ClockTime::from_hours(hours)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_wraps_forward_and_backward() {
        assert_eq!(format_time(25.5).unwrap(), "01:30");
        assert_eq!(format_time(-1.25).unwrap(), "22:45");
        assert_eq!(format_time(48.0).unwrap(), "00:00");
        assert_eq!(format_time(-24.0).unwrap(), "00:00");
    }

    #[test]
    fn test_format_time_truncates_seconds() {
        // 06:03:19 -> 06:03
        assert_eq!(format_time(6.0553).unwrap(), "06:03");
        assert_eq!(format_time(23.9999).unwrap(), "23:59");
        assert_eq!(format_time(0.0).unwrap(), "00:00");
        // Largest fraction below one hour still floors to minute 59
        assert_eq!(hours_to_clock(1.0 - f64::EPSILON / 2.0).unwrap(), (0, 59));
    }

    #[test]
    fn test_tiny_negative_does_not_produce_24() {
        assert_eq!(format_time(-1e-17).unwrap(), "00:00");
        let (hour, minute) = hours_to_clock(-f64::EPSILON).unwrap();
        assert!(hour < 24);
        assert!(minute < 60);
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert!(matches!(
            format_time(f64::NAN),
            Err(EstimateError::NonFiniteTime(_))
        ));
        assert_eq!(
            format_time(f64::INFINITY),
            Err(EstimateError::NonFiniteTime(f64::INFINITY))
        );
        assert!(format_time(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_large_values_wrap_without_looping() {
        assert_eq!(format_time(24.0 * 1e6 + 7.5).unwrap(), "07:30");
    }
}
