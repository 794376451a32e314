use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::PRETTY_TIME_FORMAT;

/// Unified error type for the augur workspace.
///
/// Every variant describes a caller-input problem: too few timestamps, a grid
/// instant with no nearby observation, mismatched series lengths, an all-zero
/// reference, malformed text, or a failed file access. None of them are
/// transient, so nothing in the workspace retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AugurError {
    /// A timestamp sequence is too short for the requested operation.
    #[error("series too short: got {len} timestamps, need at least {min}")]
    EmptySeries {
        /// Number of timestamps provided.
        len: usize,
        /// Minimum number of timestamps required.
        min: usize,
    },

    /// No source observation lies within tolerance of a target instant.
    #[error("source series is missing target time: {}", .target.format(PRETTY_TIME_FORMAT))]
    MissingAlignment {
        /// The grid instant that could not be matched.
        target: DateTime<Utc>,
        /// Distance to the nearest source observation; `None` if the source is empty.
        gap: Option<TimeDelta>,
    },

    /// Two series that must be compared element-wise differ in length.
    #[error("length mismatch: reference has {reference} values, predicted has {predicted}")]
    LengthMismatch {
        /// Length of the reference (ground truth) series.
        reference: usize,
        /// Length of the predicted series.
        predicted: usize,
    },

    /// The reference series has a zero sum of squares, so NMSE is undefined.
    #[error("degenerate reference: sum of squared reference values is zero")]
    DegenerateReference,

    /// Text could not be parsed as the expected literal format.
    #[error("parse error: {0}")]
    Parse(String),

    /// A file could not be read or written.
    #[error("i/o error on {path}: {msg}")]
    Io {
        /// Path of the file being accessed.
        path: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl AugurError {
    /// Helper: build an `EmptySeries` error for a sequence of `len` timestamps.
    #[must_use]
    pub const fn empty_series(len: usize, min: usize) -> Self {
        Self::EmptySeries { len, min }
    }

    /// Helper: build a `MissingAlignment` error for a target instant.
    #[must_use]
    pub const fn missing_alignment(target: DateTime<Utc>, gap: Option<TimeDelta>) -> Self {
        Self::MissingAlignment { target, gap }
    }

    /// Helper: build a `LengthMismatch` error.
    #[must_use]
    pub const fn length_mismatch(reference: usize, predicted: usize) -> Self {
        Self::LengthMismatch {
            reference,
            predicted,
        }
    }

    /// Helper: build a `Parse` error from a message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Helper: build an `Io` error from a path and the underlying failure.
    pub fn io(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            msg: err.to_string(),
        }
    }
}
