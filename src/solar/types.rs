//! Value types shared by the estimation strategies.

use std::fmt;

use super::error::EstimateError;
use crate::constants::{APPROXIMATE_TAG, PRECISE_TAG};
use crate::utils::hours_to_clock;

/// Observer position in degrees.
///
/// Ranges are not enforced here: out-of-range or NaN values flow into the
/// math and are handled by the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Signed minute shift applied to a computed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOffset(pub i64);

impl TimeOffset {
    pub fn minutes(self) -> i64 {
        self.0
    }

    pub fn hours(self) -> f64 {
        self.0 as f64 / 60.0
    }
}

/// Everything a strategy needs besides the clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarRequest {
    pub coordinate: GeoCoordinate,
    pub sunrise_offset: TimeOffset,
    pub sunset_offset: TimeOffset,
}

impl SolarRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinate: GeoCoordinate::new(latitude, longitude),
            sunrise_offset: TimeOffset::default(),
            sunset_offset: TimeOffset::default(),
        }
    }

    pub fn with_offsets(mut self, sunrise_minutes: i64, sunset_minutes: i64) -> Self {
        self.sunrise_offset = TimeOffset(sunrise_minutes);
        self.sunset_offset = TimeOffset(sunset_minutes);
        self
    }

    /// Parse the raw command-line values.
    ///
    /// Coordinates accept anything `f64` parses (including `nan` and `inf`);
    /// offsets must be whole minutes. Missing offsets default to zero.
    pub fn parse(
        latitude: &str,
        longitude: &str,
        sunrise_offset: Option<&str>,
        sunset_offset: Option<&str>,
    ) -> Result<Self, EstimateError> {
        let latitude = parse_float("latitude", latitude)?;
        let longitude = parse_float("longitude", longitude)?;
        let sunrise = sunrise_offset
            .map(|s| parse_minutes("sunrise offset", s))
            .transpose()?
            .unwrap_or(0);
        let sunset = sunset_offset
            .map(|s| parse_minutes("sunset offset", s))
            .transpose()?
            .unwrap_or(0);

        Ok(Self::new(latitude, longitude).with_offsets(sunrise, sunset))
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, EstimateError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| EstimateError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_minutes(field: &'static str, value: &str) -> Result<i64, EstimateError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| EstimateError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Convert fractional hours since midnight, wrapping into one day.
    pub fn from_hours(hours: f64) -> Result<Self, EstimateError> {
        let (hour, minute) = hours_to_clock(hours)?;
        Ok(Self { hour, minute })
    }

    pub(crate) const fn from_parts(parts: (u8, u8)) -> Self {
        Self {
            hour: parts.0,
            minute: parts.1,
        }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_of_day(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A sunrise/sunset pair in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
}

/// Which strategy produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationSource {
    Precise,
    Approximate,
    Default,
}

impl EstimationSource {
    /// Tag printed in front of the times.
    ///
    /// The seasonal default has no tag of its own; it is reported under the
    /// tag of the strategy the run was configured to use.
    pub fn tag(self, precise_enabled: bool) -> &'static str {
        match self {
            EstimationSource::Precise => PRECISE_TAG,
            EstimationSource::Approximate => APPROXIMATE_TAG,
            EstimationSource::Default if precise_enabled => PRECISE_TAG,
            EstimationSource::Default => APPROXIMATE_TAG,
        }
    }
}

impl fmt::Display for EstimationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimationSource::Precise => write!(f, "precise"),
            EstimationSource::Approximate => write!(f, "approximate"),
            EstimationSource::Default => write!(f, "seasonal default"),
        }
    }
}

/// Result of one estimator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub times: SunTimes,
    pub source: EstimationSource,
}

impl Estimate {
    /// The `<TAG> <HH:MM> <HH:MM>` result line.
    pub fn output_line(&self, precise_enabled: bool) -> String {
        format!(
            "{} {} {}",
            self.source.tag(precise_enabled),
            self.times.sunrise,
            self.times.sunset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_offsets_to_zero() {
        let request = SolarRequest::parse("52.52", "13.405", None, None).unwrap();
        assert_eq!(request.coordinate, GeoCoordinate::new(52.52, 13.405));
        assert_eq!(request.sunrise_offset, TimeOffset(0));
        assert_eq!(request.sunset_offset, TimeOffset(0));
    }

    #[test]
    fn test_parse_signed_offsets_and_whitespace() {
        let request = SolarRequest::parse(" -33.87 ", "151.21", Some("-15"), Some("+30")).unwrap();
        assert_eq!(request.coordinate.latitude, -33.87);
        assert_eq!(request.sunrise_offset.minutes(), -15);
        assert_eq!(request.sunset_offset.minutes(), 30);
        assert_eq!(request.sunset_offset.hours(), 0.5);
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        assert_eq!(
            SolarRequest::parse("north", "13", None, None),
            Err(EstimateError::InvalidNumber {
                field: "latitude",
                value: "north".to_string()
            })
        );
        assert!(SolarRequest::parse("52", "", None, None).is_err());
        // Offsets are whole minutes
        assert!(SolarRequest::parse("52", "13", Some("1.5"), None).is_err());
        assert!(SolarRequest::parse("52", "13", Some("0"), Some("soon")).is_err());
    }

    #[test]
    fn test_parse_accepts_non_finite_coordinates() {
        let request = SolarRequest::parse("nan", "inf", None, None).unwrap();
        assert!(request.coordinate.latitude.is_nan());
        assert!(request.coordinate.longitude.is_infinite());
    }

    #[test]
    fn test_clock_time_display_and_bounds() {
        assert_eq!(ClockTime::new(5, 7).unwrap().to_string(), "05:07");
        assert_eq!(ClockTime::new(23, 59).unwrap().minutes_of_day(), 1439);
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(12, 60).is_none());
    }

    #[test]
    fn test_source_tags() {
        assert_eq!(EstimationSource::Precise.tag(true), "ASTRAL");
        assert_eq!(EstimationSource::Approximate.tag(true), "CALCULATED");
        assert_eq!(EstimationSource::Approximate.tag(false), "CALCULATED");
        assert_eq!(EstimationSource::Default.tag(true), "ASTRAL");
        assert_eq!(EstimationSource::Default.tag(false), "CALCULATED");
    }

    #[test]
    fn test_output_line() {
        let estimate = Estimate {
            times: SunTimes {
                sunrise: ClockTime::new(6, 3).unwrap(),
                sunset: ClockTime::new(17, 56).unwrap(),
            },
            source: EstimationSource::Approximate,
        };
        assert_eq!(estimate.output_line(false), "CALCULATED 06:03 17:56");
    }
}
