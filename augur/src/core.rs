use std::sync::Arc;
use std::time::Duration;

use augur_core::{
    AlignSearch, AnchorMode, AugurConfig, AugurError, SeriesAligner, SeriesSource, TimeGrid,
};

/// Evaluator that scores predictions against history from a single source.
pub struct Augur {
    pub(crate) source: Arc<dyn SeriesSource>,
    pub(crate) cfg: AugurConfig,
    pub(crate) grid: TimeGrid,
    pub(crate) aligner: SeriesAligner,
}

/// Builder for constructing an `Augur` evaluator with custom configuration.
pub struct AugurBuilder {
    source: Option<Arc<dyn SeriesSource>>,
    cfg: AugurConfig,
}

impl Default for AugurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AugurBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults: twelve hourly grid instants, one second of alignment
    /// tolerance, exact anchoring and linear-scan lookups. A source must be
    /// registered via [`with_source`](Self::with_source) before building.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: AugurConfig::default(),
        }
    }

    /// Register the history source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: AugurConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Spacing between grid instants, in hours.
    #[must_use]
    pub const fn step_hours(mut self, hours: u32) -> Self {
        self.cfg.step_hours = hours;
        self
    }

    /// Number of grid instants; must be at least two.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.cfg.count = count;
        self
    }

    /// Maximum distance between a grid instant and its matched observation.
    ///
    /// Widen this only for sources whose timestamps are known to drift; the
    /// default of one second only absorbs quantization noise.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: Duration) -> Self {
        self.cfg.tolerance = tolerance;
        self
    }

    /// Select how the start instant is anchored.
    #[must_use]
    pub const fn anchor(mut self, mode: AnchorMode) -> Self {
        self.cfg.anchor = mode;
        self
    }

    /// Select the alignment lookup strategy.
    ///
    /// Both strategies return identical values; `Indexed` pays an upfront
    /// sort to make long histories cheaper to search.
    #[must_use]
    pub const fn search(mut self, search: AlignSearch) -> Self {
        self.cfg.search = search;
        self
    }

    /// Build the `Augur` evaluator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source is registered, the grid shape is
    /// invalid (zero step or fewer than two instants), or the tolerance does
    /// not fit a signed duration.
    pub fn build(self) -> Result<Augur, AugurError> {
        let Some(source) = self.source else {
            return Err(AugurError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };
        let grid = TimeGrid::new(self.cfg.step_hours, self.cfg.count)?;
        let aligner = SeriesAligner::from_std(self.cfg.tolerance)?;
        Ok(Augur {
            source,
            cfg: self.cfg,
            grid,
            aligner,
        })
    }
}

impl Augur {
    /// Start building a new `Augur` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use augur::{Augur, AnchorMode, OhlcFileSource};
    ///
    /// let augur = Augur::builder()
    ///     .with_source(Arc::new(OhlcFileSource::new("/tmp/eth_ohlc.txt")))
    ///     .anchor(AnchorMode::NearestHour)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AugurBuilder {
        AugurBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AugurConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}
