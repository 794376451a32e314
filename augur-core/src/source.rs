use std::path::{Path, PathBuf};

use augur_types::Series;

use crate::AugurError;
use crate::io::ohlc::load_ohlc;

/// A provider of historical observations.
///
/// Implementations hand back a fresh series on every call; nothing is cached
/// between calls.
pub trait SeriesSource: Send + Sync {
    /// Short, stable identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch the full observation series.
    ///
    /// # Errors
    /// Returns any error encountered while reading or decoding the history.
    fn series(&self) -> Result<Series, AugurError>;
}

/// Reads close prices from an OHLC history file on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcFileSource {
    path: PathBuf,
}

impl OhlcFileSource {
    /// Create a source backed by the OHLC file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for OhlcFileSource {
    fn name(&self) -> &'static str {
        "ohlc-file"
    }

    fn series(&self) -> Result<Series, AugurError> {
        load_ohlc(&self.path)
    }
}
