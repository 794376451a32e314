//! Time-series utilities: target grids, nearest-timestamp alignment and scoring.
//!
//! Modules include:
//! - `grid`: generate regular target grids and convert/format instants
//! - `align`: join an irregular series onto a grid within a tolerance
//! - `score`: compare a prediction with a reference series
/// Nearest-timestamp alignment of a source series onto target instants.
pub mod align;
/// Target grid generation plus instant conversion and formatting helpers.
pub mod grid;
/// Forecast scoring primitives.
pub mod score;
