use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};
use proptest::prelude::*;

use followsun::solar::approximate::approximate_hours;
use followsun::solar::{ApproximatePath, SolarStrategy};
use followsun::{ClockReading, FixedClock, SolarRequest};

/// Latitudes where the approximate day length never leaves the 4-20 hour window
fn temperate_latitude_strategy() -> impl Strategy<Value = f64> {
    -60.0..60.0
}

fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// A clock reading on any day of 2025 at a quarter-hour UTC offset
fn reading_strategy() -> impl Strategy<Value = ClockReading> {
    (0i64..365, -48i32..=56).prop_map(|(day, quarter_hours)| {
        let offset = FixedOffset::east_opt(quarter_hours * 15 * 60).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day);
        let now = offset
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap();
        ClockReading::take(&FixedClock::new(now))
    })
}

#[cfg(test)]
mod approximate_path_tests {
    use super::*;

    proptest! {
        /// Times always land on a valid clock face
        #[test]
        fn test_output_is_valid_clock_time(
            lat in -66.0..66.0,
            lon in longitude_strategy(),
            sunrise_offset in -720i64..720,
            sunset_offset in -720i64..720,
            reading in reading_strategy()
        ) {
            let request = SolarRequest::new(lat, lon).with_offsets(sunrise_offset, sunset_offset);
            let times = ApproximatePath.compute(&request, &reading).unwrap();

            prop_assert!(times.sunrise.hour() < 24 && times.sunrise.minute() < 60);
            prop_assert!(times.sunset.hour() < 24 && times.sunset.minute() < 60);
            prop_assert_eq!(times.sunrise.to_string().len(), 5);
        }

        /// No clamping happens away from the polar regions
        #[test]
        fn test_temperate_day_length_within_window(
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy(),
            reading in reading_strategy()
        ) {
            let hours = approximate_hours(&SolarRequest::new(lat, lon), &reading);
            prop_assert!(!hours.clamped);
            prop_assert!((4.0..=20.0).contains(&hours.day_length));
        }

        /// Sunset offset of +30 moves sunset by exactly 30 minutes and leaves sunrise alone
        #[test]
        fn test_sunset_offset_shift(
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy(),
            reading in reading_strategy()
        ) {
            let base = ApproximatePath
                .compute(&SolarRequest::new(lat, lon), &reading)
                .unwrap();
            let shifted = ApproximatePath
                .compute(&SolarRequest::new(lat, lon).with_offsets(0, 30), &reading)
                .unwrap();

            let delta = (shifted.sunset.minutes_of_day() + 1440 - base.sunset.minutes_of_day()) % 1440;
            // One minute of slack for floating-point truncation at a minute boundary
            prop_assert!((29..=31).contains(&delta), "delta was {}", delta);
            prop_assert_eq!(base.sunrise, shifted.sunrise);
        }

        /// Clamped days ignore the requested offsets
        #[test]
        fn test_clamped_days_ignore_offsets(
            lat in 75.0..85.0,
            sunrise_offset in -120i64..120,
            sunset_offset in -120i64..120,
            reading in reading_strategy()
        ) {
            let hours = approximate_hours(&SolarRequest::new(lat, 0.0), &reading);
            prop_assume!(hours.clamped);

            let request = SolarRequest::new(lat, 0.0).with_offsets(sunrise_offset, sunset_offset);
            let times = ApproximatePath.compute(&request, &reading).unwrap();
            let expected = if (80..=265).contains(&reading.day_of_year()) {
                ("05:30", "21:00")
            } else {
                ("07:00", "18:00")
            };
            prop_assert_eq!(times.sunrise.to_string(), expected.0);
            prop_assert_eq!(times.sunset.to_string(), expected.1);
        }

        /// Same inputs, same answer
        #[test]
        fn test_repeatable(
            lat in -90.0..=90.0,
            lon in longitude_strategy(),
            reading in reading_strategy()
        ) {
            let request = SolarRequest::new(lat, lon);
            prop_assert_eq!(
                ApproximatePath.compute(&request, &reading),
                ApproximatePath.compute(&request, &reading)
            );
        }
    }
}
