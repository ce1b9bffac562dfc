//! Clock abstraction for the estimator.
//!
//! Every estimate takes exactly one [`ClockReading`]: today's date, the month,
//! the ordinal day and the local UTC offset all come from that single snapshot,
//! so a run never mixes two different readings of the process clock. Tests
//! substitute [`FixedClock`] to pin a specific calendar day and offset.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate};

/// Source of the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockSource {
    /// Current wall-clock time with the local UTC offset attached.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the machine clock and the process timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Noon on the given date at a whole-hour UTC offset.
    ///
    /// Returns `None` when the date or the offset is out of range.
    pub fn noon_on(year: i32, month: u32, day: u32, utc_offset_hours: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(utc_offset_hours.checked_mul(3600)?)?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(12, 0, 0)?;
        let now = naive.and_local_timezone(offset).single()?;
        Some(Self::new(now))
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

/// One snapshot of the clock, shared by every strategy of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    now: DateTime<FixedOffset>,
}

impl ClockReading {
    pub fn take<C: ClockSource + ?Sized>(clock: &C) -> Self {
        Self { now: clock.now() }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    pub fn date(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Ordinal day of the year (1-366).
    pub fn day_of_year(&self) -> u32 {
        self.now.ordinal()
    }

    pub fn month(&self) -> u32 {
        self.now.month()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.now.offset()
    }

    /// Local UTC offset in (possibly fractional) hours.
    pub fn utc_offset_hours(&self) -> f64 {
        f64::from(self.now.offset().local_minus_utc()) / 3600.0
    }
}
