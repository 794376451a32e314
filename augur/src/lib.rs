//! Augur scores short price forecasts against observed market history.
//!
//! Overview
//! - Builds a regular target grid (default: twelve hourly instants) from a start instant.
//! - Pulls an irregular history series from a `SeriesSource` and aligns it onto the
//!   grid by nearest timestamp, within a small inclusive tolerance.
//! - Scores a prediction against the aligned observations with normalized mean
//!   squared error (NMSE).
//!
//! Key behaviors and trade-offs
//! - Alignment is all-or-nothing: one grid instant without an observation inside the
//!   tolerance fails the whole evaluation with `MissingAlignment`.
//! - Tolerance: the one second default only absorbs timestamp quantization. Widening
//!   it accepts stale observations silently.
//! - Anchoring: `Exact` trusts the caller's start; `NearestHour` rounds it first,
//!   which suits sources that report on the hour.
//! - Search: `Linear` scans the history per instant; `Indexed` sorts once and binary
//!   searches. Both return identical values, including the lowest-index tie rule.
//! - A zero-energy reference has no defined NMSE and is reported as
//!   `DegenerateReference` instead of an infinite or NaN score.
//!
//! Examples
//! Scoring a prediction against an OHLC export:
//! ```rust,ignore
//! use std::sync::Arc;
//! use augur::{Augur, OhlcFileSource};
//! use chrono::DateTime;
//!
//! let augur = Augur::builder()
//!     .with_source(Arc::new(OhlcFileSource::new("/tmp/eth_ohlc.txt")))
//!     .build()?;
//! let start = DateTime::from_timestamp(1_667_260_800, 0).unwrap();
//! let eval = augur.evaluate(start, &predicted)?;
//! println!("nmse = {}", eval.nmse);
//! for row in eval.rows() {
//!     println!("{} {} {}", row.ts, row.observed, row.predicted);
//! }
//! ```
//!
//! Scoring a prediction list saved by an earlier run:
//! ```rust,ignore
//! augur::save_list(&predicted, "/tmp/pred_vals.txt")?;
//! let eval = augur.evaluate_file(start, "/tmp/pred_vals.txt")?;
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod evaluate;

pub use core::{Augur, AugurBuilder};

pub use augur_core::{
    AlignSearch, AnchorMode, AugurConfig, AugurError, ComparisonRow, Evaluation, GridSummary,
    OhlcFileSource, Series, SeriesAligner, SeriesSource, TimeGrid, TimePoint,
};

// Free functions for callers that do not need the full evaluator.
pub use augur_core::{
    describe, format_interval, generate, load_list, load_ohlc, nmse, parse_list, parse_ohlc,
    pretty_time, round_to_hour, save_list, to_list_string,
};
