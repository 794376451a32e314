//! Text formats read and written by augur.
//!
//! - `list`: flat float lists shaped `[1.2, 3.4, 5.6]`
//! - `ohlc`: exchange OHLC history dumps, reduced to close prices

/// Flat float list persistence.
pub mod list;
/// OHLC history parsing.
pub mod ohlc;

use std::path::Path;

use crate::AugurError;

pub(crate) fn read_text(path: &Path) -> Result<String, AugurError> {
    std::fs::read_to_string(path).map_err(|e| AugurError::io(path, &e))
}

pub(crate) fn with_path(path: &Path, err: AugurError) -> AugurError {
    match err {
        AugurError::Parse(msg) => AugurError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    }
}
