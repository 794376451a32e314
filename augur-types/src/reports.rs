//! Report envelopes handed to callers after an evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of scoring a prediction against observations aligned to a grid.
///
/// `grid`, `observed` and `predicted` always have the same length. The report
/// is serializable so it can be handed to external plotting or publishing
/// tools without further conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Target instants the series were compared at.
    pub grid: Vec<DateTime<Utc>>,
    /// Observed values aligned to `grid`.
    pub observed: Vec<f64>,
    /// Predicted values, one per grid instant.
    pub predicted: Vec<f64>,
    /// Normalized mean squared error of `predicted` against `observed`.
    pub nmse: f64,
}

/// One grid step of an [`Evaluation`], e.g. one point on a comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Zero-based position in the grid.
    pub step: usize,
    /// Grid instant.
    pub ts: DateTime<Utc>,
    /// Observed value at `ts`.
    pub observed: f64,
    /// Predicted value at `ts`.
    pub predicted: f64,
}

impl Evaluation {
    /// Iterate the report row by row.
    pub fn rows(&self) -> impl Iterator<Item = ComparisonRow> + '_ {
        self.grid
            .iter()
            .zip(self.observed.iter().zip(self.predicted.iter()))
            .enumerate()
            .map(|(step, (ts, (observed, predicted)))| ComparisonRow {
                step,
                ts: *ts,
                observed: *observed,
                predicted: *predicted,
            })
    }

    /// Number of grid steps in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// True if the report covers no grid steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
