//! Exchange kline dumps: a list of records where field 0 is the open time in
//! milliseconds since the epoch and field 4 is the close price. Numeric fields
//! may be quoted, as most exchanges serialize prices as strings.

use std::path::Path;

use augur_types::{Series, TimePoint};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::AugurError;
use crate::timeseries::grid::{from_unix_millis, from_unix_seconds};

const TIMESTAMP_FIELD: usize = 0;
const CLOSE_FIELD: usize = 4;

/// Parse OHLC records into a `(timestamp, close)` series, in record order.
///
/// ```
/// use augur_core::io::ohlc::parse_ohlc;
///
/// let text = r#"[[1667260800000, "1580.1", "1590.0", "1575.2", "1584.3", "812.5"]]"#;
/// let series = parse_ohlc(text).unwrap();
/// assert_eq!(series[0].ts.timestamp(), 1_667_260_800);
/// assert_eq!(series[0].value, 1584.3);
/// ```
///
/// # Errors
/// Returns `Parse` if the text is not a list of lists, a record has fewer
/// than five fields, or the timestamp/close field is not numeric.
pub fn parse_ohlc(text: &str) -> Result<Series, AugurError> {
    let records: Vec<Vec<Value>> = serde_json::from_str(text)
        .map_err(|e| AugurError::parse(format!("expected a list of OHLC records: {e}")))?;
    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(i, record))
        .collect()
}

/// Read and parse an OHLC file.
///
/// # Errors
/// - Returns `Io` if the file cannot be read.
/// - Returns `Parse` (prefixed with the path) on malformed content.
pub fn load_ohlc(path: impl AsRef<Path>) -> Result<Series, AugurError> {
    let path = path.as_ref();
    let text = super::read_text(path)?;
    let series = parse_ohlc(&text).map_err(|e| super::with_path(path, e))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), records = series.len(), "loaded OHLC history");
    Ok(series)
}

fn parse_record(i: usize, record: &[Value]) -> Result<TimePoint, AugurError> {
    if record.len() <= CLOSE_FIELD {
        return Err(AugurError::parse(format!(
            "record {i} has {} fields, need at least {}",
            record.len(),
            CLOSE_FIELD + 1
        )));
    }
    let ts = timestamp(&record[TIMESTAMP_FIELD]).map_err(|e| match e {
        AugurError::InvalidArg(msg) => AugurError::parse(format!("record {i}: {msg}")),
        other => other,
    })?;
    let close = number(&record[CLOSE_FIELD]).ok_or_else(|| {
        AugurError::parse(format!(
            "record {i}: close field is not a number: {}",
            record[CLOSE_FIELD]
        ))
    })?;
    Ok(TimePoint::new(ts, close))
}

fn timestamp(v: &Value) -> Result<DateTime<Utc>, AugurError> {
    let exact_millis = match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if let Some(ms) = exact_millis {
        return from_unix_millis(ms);
    }
    let ms = number(v).ok_or_else(|| {
        AugurError::InvalidArg(format!("timestamp field is not a number: {v}"))
    })?;
    from_unix_seconds(ms / 1000.0)
}

fn number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|x| x.is_finite()),
        _ => None,
    }
}
