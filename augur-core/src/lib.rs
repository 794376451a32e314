//! augur-core
//!
//! Core types and pure, synchronous utilities shared across the augur crates.
//!
//! - `types`: re-exported series, report and configuration types.
//! - `timeseries`: target grids, nearest-timestamp alignment, NMSE scoring.
//! - `io`: flat float list persistence and OHLC history parsing.
//! - `source`: the `SeriesSource` trait through which history enters.
//!
//! Nothing here keeps state between calls; the only blocking work is file I/O
//! in `io` and `source::OhlcFileSource`.
#![warn(missing_docs)]

/// Flat list and OHLC text formats.
pub mod io;
/// History source trait and the file-backed implementation.
pub mod source;
/// Time-series utilities for grids, alignment and scoring.
pub mod timeseries;
pub mod types;

pub use io::list::{load_list, parse_list, save_list, to_list_string};
pub use io::ohlc::{load_ohlc, parse_ohlc};
pub use source::{OhlcFileSource, SeriesSource};
pub use timeseries::align::{SeriesAligner, SeriesIndex, nearest, series_from_parts};
pub use timeseries::grid::{
    GridSummary, MAX_GRID_COUNT, TimeGrid, describe, format_interval, from_unix_millis,
    from_unix_seconds, from_unix_seconds_all, generate, pretty_time, round_to_hour,
    to_unix_seconds, to_unix_seconds_all,
};
pub use timeseries::score::nmse;
pub use types::*;
