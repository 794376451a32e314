//! Regular target grids plus conversion and formatting helpers for instants.

use core::fmt::{self, Write as _};

use augur_types::PRETTY_TIME_FORMAT;
use chrono::{DateTime, TimeDelta, Timelike, Utc};

use crate::AugurError;

const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const NANOS_PER_SEC: f64 = 1e9;

/// Largest number of instants a [`TimeGrid`] may hold.
pub const MAX_GRID_COUNT: usize = 1 << 20;

/// A regular sequence of instants: `count` instants spaced `step` apart.
///
/// A grid always holds at least two instants so that the spacing between
/// datapoints is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    step: TimeDelta,
    count: usize,
}

impl Default for TimeGrid {
    /// Twelve hourly instants.
    fn default() -> Self {
        Self {
            step: TimeDelta::hours(1),
            count: 12,
        }
    }
}

impl TimeGrid {
    /// Build a grid of `count` instants spaced `step_hours` apart.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `step_hours` is zero, `count` is below two or
    /// above [`MAX_GRID_COUNT`], or the grid span does not fit a `TimeDelta`.
    pub fn new(step_hours: u32, count: usize) -> Result<Self, AugurError> {
        if step_hours == 0 {
            return Err(AugurError::InvalidArg(
                "grid step must be at least one hour".into(),
            ));
        }
        if count < 2 {
            return Err(AugurError::InvalidArg(format!(
                "grid needs at least 2 instants, got {count}"
            )));
        }
        if count > MAX_GRID_COUNT {
            return Err(AugurError::InvalidArg(format!(
                "grid of {count} instants exceeds the limit of {MAX_GRID_COUNT}"
            )));
        }
        let step = TimeDelta::try_hours(i64::from(step_hours)).ok_or_else(|| {
            AugurError::InvalidArg(format!("grid step of {step_hours}h is out of range"))
        })?;
        i32::try_from(count - 1)
            .ok()
            .and_then(|intervals| step.checked_mul(intervals))
            .ok_or_else(|| {
                AugurError::InvalidArg(format!(
                    "grid of {count} instants spaced {step_hours}h apart is out of range"
                ))
            })?;
        Ok(Self { step, count })
    }

    /// Spacing between consecutive instants.
    #[must_use]
    pub const fn step(&self) -> TimeDelta {
        self.step
    }

    /// Number of instants produced by [`generate`](Self::generate).
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Produce the grid instants starting at `start`.
    ///
    /// The first instant equals `start`; each following one is exactly one
    /// step later, so the output is strictly increasing with no gaps.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the grid would run past the representable calendar.
    pub fn generate(&self, start: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AugurError> {
        let mut out = Vec::with_capacity(self.count);
        let mut cur = start;
        out.push(cur);
        for _ in 1..self.count {
            cur = cur.checked_add_signed(self.step).ok_or_else(|| {
                AugurError::InvalidArg(format!(
                    "grid runs past the representable calendar after {}",
                    pretty_time(cur)
                ))
            })?;
            out.push(cur);
        }
        Ok(out)
    }
}

/// Generate `count` instants spaced `step_hours` apart, starting at `start`.
///
/// ```
/// use augur_core::timeseries::grid::generate;
/// use chrono::DateTime;
///
/// let start = DateTime::from_timestamp(1_667_260_800, 0).unwrap();
/// let grid = generate(start, 1, 12).unwrap();
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid[0], start);
/// assert_eq!((grid[11] - grid[0]).num_hours(), 11);
/// ```
///
/// # Errors
/// See [`TimeGrid::new`] and [`TimeGrid::generate`].
pub fn generate(
    start: DateTime<Utc>,
    step_hours: u32,
    count: usize,
) -> Result<Vec<DateTime<Utc>>, AugurError> {
    TimeGrid::new(step_hours, count)?.generate(start)
}

/// Round an instant to the nearest hour boundary.
///
/// Seconds and sub-seconds are discarded first; the minute alone decides the
/// direction, so `10:29:59` becomes `10:00` and `10:30:00` becomes `11:00`.
///
/// # Errors
/// Returns `InvalidArg` if rounding up leaves the representable calendar.
pub fn round_to_hour(instant: DateTime<Utc>) -> Result<DateTime<Utc>, AugurError> {
    let floor = instant.timestamp().div_euclid(HOUR) * HOUR;
    let bump = if instant.minute() >= 30 { HOUR } else { 0 };
    DateTime::from_timestamp(floor + bump, 0).ok_or_else(|| {
        AugurError::InvalidArg(format!(
            "cannot round {} to the nearest hour",
            pretty_time(instant)
        ))
    })
}

/// First/last instant, count and spacing of a timestamp sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    /// First instant.
    pub start: DateTime<Utc>,
    /// Last instant.
    pub end: DateTime<Utc>,
    /// Number of instants.
    pub count: usize,
    /// Distance between the first two instants.
    pub spacing: TimeDelta,
}

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  starts on: {}", pretty_time(self.start))?;
        writeln!(f, "    ends on: {}", pretty_time(self.end))?;
        writeln!(f, "  {} datapoints", self.count)?;
        write!(
            f,
            "  time interval between datapoints: {}",
            format_interval(self.spacing)
        )
    }
}

/// Summarize a timestamp sequence.
///
/// # Errors
/// Returns `EmptySeries` if fewer than two timestamps are given; the spacing
/// is undefined otherwise.
pub fn describe(timestamps: &[DateTime<Utc>]) -> Result<GridSummary, AugurError> {
    let [first, second, ..] = timestamps else {
        return Err(AugurError::empty_series(timestamps.len(), 2));
    };
    let end = timestamps.last().copied().unwrap_or(*second);
    Ok(GridSummary {
        start: *first,
        end,
        count: timestamps.len(),
        spacing: *second - *first,
    })
}

/// Render an instant as `YYYY/MM/DD, HH:MM:SS`.
#[must_use]
pub fn pretty_time(instant: DateTime<Utc>) -> String {
    instant.format(PRETTY_TIME_FORMAT).to_string()
}

/// Render a duration as `H:MM:SS`.
///
/// Whole days are prefixed (`2 days, 3:00:00`) and sub-second parts are
/// appended as microseconds (`0:00:01.500000`). Negative durations borrow
/// from the day count, so minus one hour reads `-1 day, 23:00:00`.
#[must_use]
pub fn format_interval(delta: TimeDelta) -> String {
    let mut secs = delta.num_seconds();
    let mut nanos = delta.subsec_nanos();
    if nanos < 0 {
        secs -= 1;
        nanos += 1_000_000_000;
    }
    let days = secs.div_euclid(DAY);
    let rem = secs.rem_euclid(DAY);
    let micros = nanos / 1_000;

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        let _ = write!(out, "{days} day{plural}, ");
    }
    let _ = write!(
        out,
        "{}:{:02}:{:02}",
        rem / HOUR,
        (rem % HOUR) / 60,
        rem % 60
    );
    if micros != 0 {
        let _ = write!(out, ".{micros:06}");
    }
    out
}

/// Convert an instant to fractional seconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / NANOS_PER_SEC
}

/// Convert fractional seconds since the Unix epoch to an instant.
///
/// Sub-second parts are kept to the nearest nanosecond.
///
/// # Errors
/// Returns `InvalidArg` for non-finite input or instants outside the calendar.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_unix_seconds(secs: f64) -> Result<DateTime<Utc>, AugurError> {
    if !secs.is_finite() {
        return Err(AugurError::InvalidArg(format!(
            "timestamp {secs} is not a finite number of seconds"
        )));
    }
    let mut whole = secs.floor();
    let mut nanos = ((secs - whole) * NANOS_PER_SEC).round();
    if nanos >= NANOS_PER_SEC {
        whole += 1.0;
        nanos -= NANOS_PER_SEC;
    }
    DateTime::from_timestamp(whole as i64, nanos as u32).ok_or_else(|| {
        AugurError::InvalidArg(format!("timestamp {secs}s is outside the calendar"))
    })
}

/// Convert milliseconds since the Unix epoch to an instant.
///
/// # Errors
/// Returns `InvalidArg` for instants outside the calendar.
pub fn from_unix_millis(millis: i64) -> Result<DateTime<Utc>, AugurError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        AugurError::InvalidArg(format!("timestamp {millis}ms is outside the calendar"))
    })
}

/// Slice form of [`to_unix_seconds`].
#[must_use]
pub fn to_unix_seconds_all(instants: &[DateTime<Utc>]) -> Vec<f64> {
    instants.iter().copied().map(to_unix_seconds).collect()
}

/// Slice form of [`from_unix_seconds`]; fails on the first invalid entry.
///
/// # Errors
/// See [`from_unix_seconds`].
pub fn from_unix_seconds_all(secs: &[f64]) -> Result<Vec<DateTime<Utc>>, AugurError> {
    secs.iter().copied().map(from_unix_seconds).collect()
}
