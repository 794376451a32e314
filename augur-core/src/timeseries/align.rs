use augur_types::{Series, TimePoint};
use chrono::{DateTime, TimeDelta, Utc};

#[cfg(feature = "tracing")]
use super::grid::pretty_time;
use super::grid::from_unix_seconds;
use crate::AugurError;

/// Find the source point closest in time to `target`.
///
/// Scans every point and returns its index with the absolute time distance.
/// On exact ties the lowest index wins. Returns `None` for an empty source.
#[must_use]
pub fn nearest(source: &[TimePoint], target: DateTime<Utc>) -> Option<(usize, TimeDelta)> {
    let mut best: Option<(usize, TimeDelta)> = None;
    for (i, p) in source.iter().enumerate() {
        let gap = (p.ts - target).abs();
        match best {
            Some((_, best_gap)) if gap >= best_gap => {}
            _ => best = Some((i, gap)),
        }
    }
    best
}

/// Sorted view over a source series for logarithmic nearest lookups.
///
/// Lookups return exactly what [`nearest`] returns on the unsorted source,
/// including the lowest-index rule on ties.
#[derive(Debug, Clone)]
pub struct SeriesIndex<'a> {
    source: &'a [TimePoint],
    // Source indices ordered by timestamp; equal timestamps keep source order.
    order: Vec<usize>,
}

impl<'a> SeriesIndex<'a> {
    /// Build the index. O(n log n).
    #[must_use]
    pub fn new(source: &'a [TimePoint]) -> Self {
        let mut order: Vec<usize> = (0..source.len()).collect();
        order.sort_by_key(|&i| source[i].ts);
        Self { source, order }
    }

    /// Index-backed equivalent of [`nearest`].
    #[must_use]
    pub fn nearest(&self, target: DateTime<Utc>) -> Option<(usize, TimeDelta)> {
        let at = |i: usize| self.source[i].ts;
        let split = self.order.partition_point(|&i| at(i) < target);

        // First entry of the run at or after the target.
        let after = self.order.get(split).copied();
        // First entry of the run just before the target.
        let before = split.checked_sub(1).map(|last| {
            let run_ts = at(self.order[last]);
            let run_start = self.order[..last].partition_point(|&i| at(i) < run_ts);
            self.order[run_start]
        });

        let gap = |i: usize| (at(i) - target).abs();
        match (before, after) {
            (Some(b), Some(a)) => {
                let (gb, ga) = (gap(b), gap(a));
                if gb < ga || (gb == ga && b < a) {
                    Some((b, gb))
                } else {
                    Some((a, ga))
                }
            }
            (Some(b), None) => Some((b, gap(b))),
            (None, Some(a)) => Some((a, gap(a))),
            (None, None) => None,
        }
    }
}

/// Joins an irregular source series onto target instants by nearest timestamp.
///
/// A target is matched only if its nearest observation lies within the
/// tolerance (inclusive). Alignment is all-or-nothing: one unmatched target
/// fails the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesAligner {
    tolerance: TimeDelta,
}

impl Default for SeriesAligner {
    /// One second of tolerance.
    fn default() -> Self {
        Self {
            tolerance: TimeDelta::seconds(1),
        }
    }
}

impl SeriesAligner {
    /// Build an aligner with the given tolerance.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `tolerance` is negative.
    pub fn new(tolerance: TimeDelta) -> Result<Self, AugurError> {
        if tolerance < TimeDelta::zero() {
            return Err(AugurError::InvalidArg(format!(
                "alignment tolerance must not be negative, got {tolerance}"
            )));
        }
        Ok(Self { tolerance })
    }

    /// Build an aligner from a `std::time::Duration` tolerance.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the duration does not fit a `TimeDelta`.
    pub fn from_std(tolerance: std::time::Duration) -> Result<Self, AugurError> {
        let tolerance = TimeDelta::from_std(tolerance)
            .map_err(|e| AugurError::InvalidArg(format!("alignment tolerance: {e}")))?;
        Self::new(tolerance)
    }

    /// Maximum accepted distance between a target and its match.
    #[must_use]
    pub const fn tolerance(&self) -> TimeDelta {
        self.tolerance
    }

    /// Return one source value per target, using a linear scan per target.
    ///
    /// The source may be unsorted and may hold more points than there are
    /// targets. Cost is O(targets × source).
    ///
    /// # Errors
    /// Returns `MissingAlignment` for the first target whose nearest source
    /// point is farther than the tolerance (or when the source is empty).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur_core::timeseries::align",
            skip_all,
            fields(sources = source.len(), targets = targets.len()),
        )
    )]
    pub fn align(
        &self,
        source: &[TimePoint],
        targets: &[DateTime<Utc>],
    ) -> Result<Vec<f64>, AugurError> {
        targets
            .iter()
            .map(|&target| self.accept(source, target, nearest(source, target)))
            .collect()
    }

    /// Same contract and output as [`align`](Self::align), backed by a [`SeriesIndex`].
    ///
    /// # Errors
    /// See [`align`](Self::align).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur_core::timeseries::align_indexed",
            skip_all,
            fields(sources = source.len(), targets = targets.len()),
        )
    )]
    pub fn align_indexed(
        &self,
        source: &[TimePoint],
        targets: &[DateTime<Utc>],
    ) -> Result<Vec<f64>, AugurError> {
        let index = SeriesIndex::new(source);
        targets
            .iter()
            .map(|&target| self.accept(source, target, index.nearest(target)))
            .collect()
    }

    fn accept(
        &self,
        source: &[TimePoint],
        target: DateTime<Utc>,
        hit: Option<(usize, TimeDelta)>,
    ) -> Result<f64, AugurError> {
        match hit {
            Some((i, gap)) if gap <= self.tolerance => Ok(source[i].value),
            other => {
                let gap = other.map(|(_, gap)| gap);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target_time = %pretty_time(target),
                    gap = ?gap,
                    tolerance = %self.tolerance,
                    "no source point within tolerance"
                );
                Err(AugurError::missing_alignment(target, gap))
            }
        }
    }
}

/// Zip parallel timestamp (seconds since epoch) and value slices into a series.
///
/// # Errors
/// - Returns `LengthMismatch` if the slices differ in length.
/// - Returns `InvalidArg` if a timestamp is not a valid instant.
pub fn series_from_parts(timestamps: &[f64], values: &[f64]) -> Result<Series, AugurError> {
    if timestamps.len() != values.len() {
        return Err(AugurError::length_mismatch(timestamps.len(), values.len()));
    }
    timestamps
        .iter()
        .zip(values)
        .map(|(&secs, &value)| Ok(TimePoint::new(from_unix_seconds(secs)?, value)))
        .collect()
}
