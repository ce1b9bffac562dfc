//! Closed-form sunrise/sunset estimate.
//!
//! Uses a sine approximation of the solar declination (referenced to the spring
//! equinox at day 80) and the standard hour-angle relation with a -0.83° horizon
//! to get the length of the day, then centers that day on solar noon as shifted
//! by longitude and the local UTC offset. Accuracy is a few minutes at temperate
//! latitudes, which is plenty for a display scheduler.
//!
//! Degenerate days (polar day, polar night, or an inverse-cosine argument outside
//! [-1, 1]) are detected through the day length and replaced by a fixed seasonal
//! table instead of being reported as errors.

use std::f64::consts::PI;

use super::error::EstimateError;
use super::estimator::SolarStrategy;
use super::types::{ClockTime, EstimationSource, SolarRequest, SunTimes};
use crate::clock::ClockReading;
use crate::constants::{
    DAYS_PER_YEAR, DECLINATION_AMPLITUDE, EQUINOX_DAY_OF_YEAR, HORIZON_CORRECTION_DEGREES,
    MAXIMUM_DAY_LENGTH_HOURS, MINIMUM_DAY_LENGTH_HOURS, SUMMER_OVERRIDE_FIRST_DAY,
    SUMMER_OVERRIDE_LAST_DAY, SUMMER_OVERRIDE_SUNRISE_HOURS, SUMMER_OVERRIDE_SUNSET_HOURS,
    WINTER_OVERRIDE_SUNRISE_HOURS, WINTER_OVERRIDE_SUNSET_HOURS,
};
use crate::logger::Log;

/// Intermediate values of the approximate calculation, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateHours {
    pub day_length: f64,
    pub solar_noon: f64,
    /// Sunrise with its offset applied, or the override value when clamped.
    pub sunrise: f64,
    /// Sunset with its offset applied, or the override value when clamped.
    pub sunset: f64,
    /// Whether the seasonal override table replaced the computed times.
    pub clamped: bool,
}

/// Solar declination in radians for an ordinal day.
pub fn solar_declination(day_of_year: u32) -> f64 {
    let angle = 2.0 * PI / DAYS_PER_YEAR * (f64::from(day_of_year) - EQUINOX_DAY_OF_YEAR);
    DECLINATION_AMPLITUDE * angle.sin()
}

/// Hours between sunrise and sunset.
///
/// Returns NaN when the sun never crosses the corrected horizon, since `acos`
/// of an argument outside [-1, 1] is NaN.
pub fn day_length_hours(latitude: f64, declination: f64) -> f64 {
    let lat_rad = latitude.to_radians();
    let cos_hour_angle = (HORIZON_CORRECTION_DEGREES.to_radians().sin()
        + lat_rad.sin() * declination.sin())
        / (lat_rad.cos() * declination.cos());
    24.0 - (24.0 / PI) * cos_hour_angle.acos()
}

/// Seasonal replacement times (sunrise, sunset) for a degenerate day.
pub fn seasonal_override(day_of_year: u32) -> (f64, f64) {
    if (SUMMER_OVERRIDE_FIRST_DAY..=SUMMER_OVERRIDE_LAST_DAY).contains(&day_of_year) {
        (SUMMER_OVERRIDE_SUNRISE_HOURS, SUMMER_OVERRIDE_SUNSET_HOURS)
    } else {
        (WINTER_OVERRIDE_SUNRISE_HOURS, WINTER_OVERRIDE_SUNSET_HOURS)
    }
}

/// Run the approximate calculation up to (but not including) formatting.
pub fn approximate_hours(request: &SolarRequest, reading: &ClockReading) -> ApproximateHours {
    let day_of_year = reading.day_of_year();
    let declination = solar_declination(day_of_year);
    let day_length = day_length_hours(request.coordinate.latitude, declination);

    let longitude_correction = request.coordinate.longitude / 15.0 - reading.utc_offset_hours();
    let solar_noon = 12.0 - longitude_correction;

    let sunrise = solar_noon - day_length / 2.0 + request.sunrise_offset.hours();
    let sunset = solar_noon + day_length / 2.0 + request.sunset_offset.hours();

    // NaN fails the range check as well
    if !(MINIMUM_DAY_LENGTH_HOURS..=MAXIMUM_DAY_LENGTH_HOURS).contains(&day_length) {
        let (sunrise, sunset) = seasonal_override(day_of_year);
        return ApproximateHours {
            day_length,
            solar_noon,
            sunrise,
            sunset,
            clamped: true,
        };
    }

    ApproximateHours {
        day_length,
        solar_noon,
        sunrise,
        sunset,
        clamped: false,
    }
}

/// The approximate strategy: no external capability required.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximatePath;

impl SolarStrategy for ApproximatePath {
    fn source(&self) -> EstimationSource {
        EstimationSource::Approximate
    }

    fn compute(
        &self,
        request: &SolarRequest,
        reading: &ClockReading,
    ) -> Result<SunTimes, EstimateError> {
        let hours = approximate_hours(request, reading);

        if hours.clamped {
            Log::log_warning(&format!(
                "Day length {:.2}h is outside {}-{}h, using seasonal override times",
                hours.day_length, MINIMUM_DAY_LENGTH_HOURS, MAXIMUM_DAY_LENGTH_HOURS
            ));
        } else {
            Log::log_debug(&format!(
                "Day length {:.2}h, solar noon {:.2}h",
                hours.day_length, hours.solar_noon
            ));
        }

        Ok(SunTimes {
            sunrise: ClockTime::from_hours(hours.sunrise)?,
            sunset: ClockTime::from_hours(hours.sunset)?,
        })
    }
}
