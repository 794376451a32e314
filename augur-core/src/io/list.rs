use core::fmt::Write as _;
use std::path::Path;

use crate::AugurError;

/// Render values as a literal list: `[1.2, -3.4, 5.0]`.
///
/// Each value uses the shortest form that parses back to the same `f64`.
///
/// # Errors
/// Returns `InvalidArg` if a value is NaN or infinite; such values have no
/// literal form that [`parse_list`] would accept.
pub fn to_list_string(values: &[f64]) -> Result<String, AugurError> {
    let mut out = String::with_capacity(2 + values.len() * 12);
    out.push('[');
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(AugurError::InvalidArg(format!(
                "value at position {i} is not finite: {v}"
            )));
        }
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v:?}");
    }
    out.push(']');
    Ok(out)
}

/// Parse a literal list of numbers.
///
/// Only a flat list of numeric literals is accepted; nested lists, strings,
/// identifiers, `nan`/`inf` and trailing commas are rejected.
///
/// ```
/// use augur_core::io::list::parse_list;
///
/// assert_eq!(parse_list("[1.5, -2, 3e2]").unwrap(), vec![1.5, -2.0, 300.0]);
/// assert!(parse_list("[1.5, __import__('os')]").is_err());
/// ```
///
/// # Errors
/// Returns `Parse` on malformed input.
pub fn parse_list(text: &str) -> Result<Vec<f64>, AugurError> {
    serde_json::from_str::<Vec<f64>>(text)
        .map_err(|e| AugurError::parse(format!("expected a flat list of numbers: {e}")))
}

/// Write `values` to `path` as a literal list, replacing any existing content.
///
/// # Errors
/// - Returns `InvalidArg` for non-finite values (nothing is written).
/// - Returns `Io` if the file cannot be written.
pub fn save_list(values: &[f64], path: impl AsRef<Path>) -> Result<(), AugurError> {
    let path = path.as_ref();
    let text = to_list_string(values)?;
    std::fs::write(path, text).map_err(|e| AugurError::io(path, &e))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), len = values.len(), "saved list");
    Ok(())
}

/// Read a literal list of numbers from `path`.
///
/// # Errors
/// - Returns `Io` if the file cannot be read.
/// - Returns `Parse` (prefixed with the path) on malformed content.
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<f64>, AugurError> {
    let path = path.as_ref();
    let text = super::read_text(path)?;
    parse_list(&text).map_err(|e| super::with_path(path, e))
}
