#![allow(dead_code)]

// Lightweight fixtures shared by the evaluator tests.

use std::sync::Arc;

use augur::{Augur, SeriesSource, TimePoint};
use augur_mock::MockSource;
use chrono::{DateTime, TimeZone, Utc};

/// Construct a UTC `DateTime` from components for readability in tests.
pub fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hh, mm, ss)
        .single()
        .expect("valid utc instant")
}

/// Evaluator over the mock ETH/USDT fixture with default settings.
pub fn mock_augur() -> Augur {
    Augur::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .expect("augur builds")
}

/// Hourly series starting at `start` with the given values.
pub fn hourly(start: DateTime<Utc>, values: &[f64]) -> Vec<TimePoint> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&v, h)| TimePoint::new(start + chrono::TimeDelta::hours(h), v))
        .collect()
}

pub fn arc<S: SeriesSource + 'static>(source: S) -> Arc<dyn SeriesSource> {
    Arc::new(source)
}
