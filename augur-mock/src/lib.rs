//! Mock history sources with deterministic data, for tests and CI-safe demos.

use augur_core::{AugurError, Series, SeriesSource, parse_ohlc};
use chrono::{DateTime, Utc};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::history::{HOURLY_CLOSES, PREDICTED};

/// Mock source serving a fixed day of ETH/USDT 30-minute history.
///
/// The fixture is stored in exchange dump form and decoded on every call, so
/// it exercises the same OHLC path as a file-backed source.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// First candle of the fixture (2022-11-01 00:00:00 UTC).
    #[must_use]
    pub fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(fixtures::history::START_SECS, 0).unwrap_or_default()
    }

    /// Raw fixture text, e.g. for writing a history file in tests.
    #[must_use]
    pub const fn ohlc_text() -> &'static str {
        fixtures::history::ETH_USDT_30M
    }
}

impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "augur-mock"
    }

    fn series(&self) -> Result<Series, AugurError> {
        parse_ohlc(fixtures::history::ETH_USDT_30M)
    }
}

/// Serves a caller-provided series unchanged.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: &'static str,
    series: Series,
}

impl StaticSource {
    #[must_use]
    pub const fn new(series: Series) -> Self {
        Self::named("static", series)
    }

    #[must_use]
    pub const fn named(name: &'static str, series: Series) -> Self {
        Self { name, series }
    }
}

impl SeriesSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn series(&self) -> Result<Series, AugurError> {
        Ok(self.series.clone())
    }
}
