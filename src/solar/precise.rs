//! Sunrise and sunset from a full solar position model.
//!
//! Delegates to the `sunrise` crate, which solves for the instants the sun's
//! upper limb crosses the horizon for an observer at the given coordinates.
//! Results are converted to the local UTC offset captured in the clock reading,
//! shifted by the requested minute offsets, and truncated to minutes.
//!
//! This path never falls back on its own; any failure is returned to the
//! orchestrator.

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, NaiveTime, TimeDelta, Timelike, Utc};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use super::error::EstimateError;
use super::estimator::SolarStrategy;
use super::types::{ClockTime, EstimationSource, SolarRequest, SunTimes, TimeOffset};
use crate::clock::ClockReading;
use crate::logger::Log;

/// The precise strategy, available with the `precise` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecisePath;

impl SolarStrategy for PrecisePath {
    fn source(&self) -> EstimationSource {
        EstimationSource::Precise
    }

    fn compute(
        &self,
        request: &SolarRequest,
        reading: &ClockReading,
    ) -> Result<SunTimes, EstimateError> {
        let latitude = request.coordinate.latitude;
        let longitude = request.coordinate.longitude;

        let coord = Coordinates::new(latitude, longitude).ok_or(
            EstimateError::InvalidCoordinates {
                latitude,
                longitude,
            },
        )?;
        let solar_day = SolarDay::new(coord, reading.date());

        let sunrise = local_event_time(
            &solar_day,
            SolarEvent::Sunrise,
            "sunrise",
            reading,
            request.sunrise_offset,
        )?;
        let sunset = local_event_time(
            &solar_day,
            SolarEvent::Sunset,
            "sunset",
            reading,
            request.sunset_offset,
        )?;

        Log::log_debug(&format!(
            "Solar model sunrise {} sunset {} (offset {})",
            sunrise.format("%H:%M:%S"),
            sunset.format("%H:%M:%S"),
            reading.offset()
        ));

        Ok(SunTimes {
            sunrise: truncate_to_minute(sunrise),
            sunset: truncate_to_minute(sunset),
        })
    }
}

/// Compute one event, convert it to the local offset and apply the minute shift.
fn local_event_time(
    solar_day: &SolarDay,
    event: SolarEvent,
    event_name: &'static str,
    reading: &ClockReading,
    offset: TimeOffset,
) -> Result<NaiveTime, EstimateError> {
    // A panic inside the model counts as a failed path, not a crashed run
    let instant: DateTime<Utc> =
        panic::catch_unwind(AssertUnwindSafe(|| solar_day.event_time(event)))
            .map_err(|payload| EstimateError::SolarLibrary(panic_message(payload.as_ref())))?;

    let local = instant.with_timezone(&reading.offset());

    // Without a horizon crossing the model returns an instant far from the requested day
    let days_apart = (local.date_naive() - reading.date()).num_days();
    if days_apart.abs() > 1 {
        return Err(EstimateError::NoSolarEvent { event: event_name });
    }

    let shift = TimeDelta::try_minutes(offset.minutes())
        .ok_or(EstimateError::OffsetOutOfRange(offset.minutes()))?;
    let shifted = local
        .checked_add_signed(shift)
        .ok_or(EstimateError::OffsetOutOfRange(offset.minutes()))?;

    Ok(shifted.time())
}

fn truncate_to_minute(time: NaiveTime) -> ClockTime {
    // hour() < 24 and minute() < 60 by construction
    ClockTime::from_parts((time.hour() as u8, time.minute() as u8))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "solar position model panicked".to_string()
    }
}
