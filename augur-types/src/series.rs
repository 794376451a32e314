//! Timestamped observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observation: an instant and the value seen at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Observation instant (UTC).
    pub ts: DateTime<Utc>,
    /// Observed value, typically a close price.
    pub value: f64,
}

impl TimePoint {
    /// Construct a point from an instant and a value.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// An ordered sequence of observations. Neither sorting nor regular spacing is required.
pub type Series = Vec<TimePoint>;
