use std::sync::Arc;

use augur_core::{OhlcFileSource, SeriesSource};
use augur_mock::MockSource;
use chrono::{DateTime, Utc};

/// Path of an OHLC history dump to use instead of the bundled fixture.
pub const OHLC_FILE_VAR: &str = "AUGUR_OHLC_FILE";
/// First grid instant as whole seconds since the epoch.
pub const START_VAR: &str = "AUGUR_START";

/// Return a history source for demos.
///
/// Reads the file named by `AUGUR_OHLC_FILE` when set, otherwise the mock
/// ETH/USDT fixture.
#[must_use]
pub fn get_source() -> Arc<dyn SeriesSource> {
    match std::env::var(OHLC_FILE_VAR) {
        Ok(path) => Arc::new(OhlcFileSource::new(path)),
        Err(_) => {
            println!("--- (Using Mock Source) ---");
            Arc::new(MockSource::new())
        }
    }
}

/// Start instant for demos: `AUGUR_START` when set and valid, else the first
/// candle of the mock fixture.
#[must_use]
pub fn get_start() -> DateTime<Utc> {
    std::env::var(START_VAR)
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(MockSource::start)
}

/// Forecast used by the demos, one value per hour of the default grid.
#[must_use]
pub fn sample_prediction() -> Vec<f64> {
    augur_mock::PREDICTED.to_vec()
}
