//! Ordered fallback between estimation strategies.
//!
//! The [`Estimator`] holds a list of [`SolarStrategy`] implementations in
//! priority order (precise first when available, then approximate) and returns
//! the first success. When every strategy fails it answers with fixed seasonal
//! defaults, so an estimate is always produced.
//!
//! ```text
//! START → PRECISE ──ok──▶ DONE(Precise)
//!            │err
//!            ▼
//!        APPROXIMATE ──ok──▶ DONE(Approximate)
//!            │err
//!            ▼
//!        DONE(Default)
//! ```

use super::approximate::ApproximatePath;
use super::error::EstimateError;
#[cfg(feature = "precise")]
use super::precise::PrecisePath;
use super::types::{ClockTime, Estimate, EstimationSource, SolarRequest, SunTimes};
use crate::clock::{ClockReading, ClockSource};
use crate::constants::{
    SUMMER_DEFAULT_FIRST_MONTH, SUMMER_DEFAULT_LAST_MONTH, SUMMER_DEFAULT_SUNRISE,
    SUMMER_DEFAULT_SUNSET, WINTER_DEFAULT_SUNRISE, WINTER_DEFAULT_SUNSET,
};
use crate::logger::{Log, LogLevel};

/// Optional capabilities resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the library-grade solar position model may be used.
    pub precise: bool,
}

impl Capabilities {
    /// Capabilities compiled into this build.
    pub fn detect() -> Self {
        Self {
            precise: cfg!(feature = "precise"),
        }
    }

    pub fn approximate_only() -> Self {
        Self { precise: false }
    }
}

/// One way of computing today's sunrise and sunset.
///
/// Implementations are pure apart from logging: the same request and clock
/// reading always give the same result.
#[cfg_attr(test, mockall::automock)]
pub trait SolarStrategy {
    /// Source tag attached to a successful result.
    fn source(&self) -> EstimationSource;

    /// Compute the local sunrise/sunset pair, offsets included.
    fn compute(
        &self,
        request: &SolarRequest,
        reading: &ClockReading,
    ) -> Result<SunTimes, EstimateError>;
}

/// Seasonal fallback pair for a calendar month (1-12).
pub fn seasonal_default(month: u32) -> SunTimes {
    let (sunrise, sunset) =
        if (SUMMER_DEFAULT_FIRST_MONTH..=SUMMER_DEFAULT_LAST_MONTH).contains(&month) {
            (SUMMER_DEFAULT_SUNRISE, SUMMER_DEFAULT_SUNSET)
        } else {
            (WINTER_DEFAULT_SUNRISE, WINTER_DEFAULT_SUNSET)
        };
    SunTimes {
        sunrise: ClockTime::from_parts(sunrise),
        sunset: ClockTime::from_parts(sunset),
    }
}

#[cfg(feature = "precise")]
fn precise_strategy() -> Option<Box<dyn SolarStrategy>> {
    Some(Box::new(PrecisePath))
}

#[cfg(not(feature = "precise"))]
fn precise_strategy() -> Option<Box<dyn SolarStrategy>> {
    None
}

/// Solar time estimator with ordered fallback.
pub struct Estimator<C: ClockSource> {
    clock: C,
    capabilities: Capabilities,
    strategies: Vec<Box<dyn SolarStrategy>>,
}

impl<C: ClockSource> Estimator<C> {
    /// Build the standard strategy chain for the given capabilities.
    ///
    /// Requesting the precise capability in a build without the `precise`
    /// feature is treated as not having it.
    pub fn new(clock: C, capabilities: Capabilities) -> Self {
        let capabilities = Capabilities {
            precise: capabilities.precise && cfg!(feature = "precise"),
        };

        let mut strategies: Vec<Box<dyn SolarStrategy>> = Vec::with_capacity(2);
        if capabilities.precise {
            strategies.extend(precise_strategy());
        }
        strategies.push(Box::new(ApproximatePath));

        Self::with_strategies(clock, capabilities, strategies)
    }

    /// Build an estimator over an explicit strategy list, tried in order.
    pub fn with_strategies(
        clock: C,
        capabilities: Capabilities,
        strategies: Vec<Box<dyn SolarStrategy>>,
    ) -> Self {
        Self {
            clock,
            capabilities,
            strategies,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Estimate today's sunrise and sunset for a parsed request.
    pub fn estimate(&self, request: &SolarRequest) -> Estimate {
        let reading = self.begin();
        self.run_strategies(request, &reading)
    }

    /// Estimate from raw command-line values.
    ///
    /// Malformed numbers are not fatal: they are logged and answered with the
    /// seasonal defaults, like any other failure of the chain.
    pub fn estimate_args(
        &self,
        latitude: &str,
        longitude: &str,
        sunrise_offset: Option<&str>,
        sunset_offset: Option<&str>,
    ) -> Estimate {
        let reading = self.begin();
        match SolarRequest::parse(latitude, longitude, sunrise_offset, sunset_offset) {
            Ok(request) => self.run_strategies(&request, &reading),
            Err(e) => {
                Log::log_error_chain(
                    LogLevel::Err,
                    &anyhow::Error::new(e).context("Could not read the requested location"),
                );
                Self::seasonal_fallback(&reading)
            }
        }
    }

    /// Take the clock reading for this estimate and announce degraded mode.
    fn begin(&self) -> ClockReading {
        let reading = ClockReading::take(&self.clock);
        Log::log_debug(&format!(
            "Clock reading {} (day {} of year, UTC{:+})",
            reading.now().format("%Y-%m-%d %H:%M"),
            reading.day_of_year(),
            reading.utc_offset_hours()
        ));

        if !self.capabilities.precise {
            Log::log_info("Using fallback calculation (precise solar model not available)");
            Log::log_indented("For better accuracy enable the precise solar model");
        }
        reading
    }

    fn run_strategies(&self, request: &SolarRequest, reading: &ClockReading) -> Estimate {
        for strategy in &self.strategies {
            let source = strategy.source();
            Log::log_debug(&format!("Trying {} calculation", source));

            match strategy.compute(request, reading) {
                Ok(times) => return Estimate { times, source },
                Err(e) => Log::log_error_chain(
                    LogLevel::Err,
                    &anyhow::Error::new(e).context(format!("{} calculation failed", source)),
                ),
            }
        }

        Self::seasonal_fallback(reading)
    }

    fn seasonal_fallback(reading: &ClockReading) -> Estimate {
        Log::log_info("Calculation error, using seasonal defaults");
        Estimate {
            times: seasonal_default(reading.month()),
            source: EstimationSource::Default,
        }
    }
}
