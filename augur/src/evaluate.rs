use std::path::Path;

use augur_core::{AlignSearch, AnchorMode, AugurError, Evaluation, load_list, nmse, round_to_hour};
#[cfg(feature = "tracing")]
use augur_core::{describe, format_interval, pretty_time};
use chrono::{DateTime, Utc};

use crate::Augur;

impl Augur {
    /// Resolve the first grid instant for `start` according to the anchor mode.
    ///
    /// # Errors
    /// Returns `InvalidArg` if rounding leaves the representable calendar.
    pub fn anchor(&self, start: DateTime<Utc>) -> Result<DateTime<Utc>, AugurError> {
        match self.cfg.anchor {
            AnchorMode::NearestHour => round_to_hour(start),
            _ => Ok(start),
        }
    }

    /// Build the target grid for `start`.
    ///
    /// With the `tracing` feature the grid's summary is logged at info level.
    ///
    /// # Errors
    /// Returns `InvalidArg` if anchoring or generation leaves the calendar.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::evaluate::target_grid",
            skip(self),
            fields(start = %start),
        )
    )]
    pub fn target_grid(&self, start: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AugurError> {
        let grid = self.grid.generate(self.anchor(start)?)?;
        #[cfg(feature = "tracing")]
        {
            if let Ok(summary) = describe(&grid) {
                tracing::info!(
                    starts_on = %pretty_time(summary.start),
                    ends_on = %pretty_time(summary.end),
                    datapoints = summary.count,
                    interval = %format_interval(summary.spacing),
                    "target grid"
                );
            }
        }
        Ok(grid)
    }

    /// Fetch the source history and align it onto `grid`.
    ///
    /// The source is queried on every call; nothing is cached.
    ///
    /// # Errors
    /// - Propagates any error from the source.
    /// - Returns `MissingAlignment` if a grid instant has no observation within tolerance.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::evaluate::observed",
            skip(self, grid),
            fields(source = self.source.name(), targets = grid.len()),
        )
    )]
    pub fn observed(&self, grid: &[DateTime<Utc>]) -> Result<Vec<f64>, AugurError> {
        let series = self.source.series()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(points = series.len(), "fetched history");
        match self.cfg.search {
            AlignSearch::Indexed => self.aligner.align_indexed(&series, grid),
            _ => self.aligner.align(&series, grid),
        }
    }

    /// Score `predicted` against observations on the grid starting at `start`.
    ///
    /// # Errors
    /// - Returns `LengthMismatch` if `predicted` does not have one value per
    ///   grid instant; the source is not queried in that case.
    /// - Returns `MissingAlignment` if the history does not cover the grid.
    /// - Returns `DegenerateReference` if every observed value is zero.
    /// - Returns `InvalidArg` if the score is not finite.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::evaluate::evaluate",
            skip(self, predicted),
            fields(source = self.source.name(), start = %start, predicted = predicted.len()),
        )
    )]
    pub fn evaluate(
        &self,
        start: DateTime<Utc>,
        predicted: &[f64],
    ) -> Result<Evaluation, AugurError> {
        let grid = self.target_grid(start)?;
        if predicted.len() != grid.len() {
            return Err(AugurError::length_mismatch(grid.len(), predicted.len()));
        }
        let observed = self.observed(&grid)?;
        let score = nmse(&observed, predicted)?;
        #[cfg(feature = "tracing")]
        tracing::info!(nmse = score, "scored prediction");
        Ok(Evaluation {
            grid,
            observed,
            predicted: predicted.to_vec(),
            nmse: score,
        })
    }

    /// Load a saved prediction list from `path` and score it.
    ///
    /// # Errors
    /// - Returns `Io` or `Parse` if the prediction file cannot be loaded.
    /// - Otherwise as [`evaluate`](Self::evaluate).
    pub fn evaluate_file(
        &self,
        start: DateTime<Utc>,
        path: impl AsRef<Path>,
    ) -> Result<Evaluation, AugurError> {
        let predicted = load_list(path)?;
        self.evaluate(start, &predicted)
    }
}
