//! Configuration types shared by the evaluator and its helpers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the caller-supplied start instant becomes the first grid instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnchorMode {
    /// Use the start instant unchanged.
    #[default]
    Exact,
    /// Round the start instant to the nearest hour boundary (minute >= 30 rounds up).
    NearestHour,
}

/// Lookup strategy for joining a source series onto the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AlignSearch {
    /// Scan every source point for every target. Cheapest for small inputs.
    #[default]
    Linear,
    /// Sort the source once and binary-search each target.
    /// Produces the same values as `Linear`, ties included.
    Indexed,
}

/// Global configuration for the `Augur` evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugurConfig {
    /// Spacing between consecutive grid instants, in whole hours.
    pub step_hours: u32,
    /// Number of grid instants (must be at least 2).
    pub count: usize,
    /// Maximum distance between a grid instant and its matched observation (inclusive).
    pub tolerance: Duration,
    /// How the start instant is anchored.
    pub anchor: AnchorMode,
    /// Lookup strategy used during alignment.
    pub search: AlignSearch,
}

impl Default for AugurConfig {
    fn default() -> Self {
        Self {
            step_hours: 1,
            count: 12,
            tolerance: Duration::from_secs(1),
            anchor: AnchorMode::Exact,
            search: AlignSearch::Linear,
        }
    }
}
