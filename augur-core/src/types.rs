//! Re-export of foundational types from `augur-types`.
// Consolidated re-exports so downstream crates can depend on `augur-core` only

pub use augur_types::{
    AlignSearch, AnchorMode, AugurConfig, AugurError, ComparisonRow, Evaluation,
    PRETTY_TIME_FORMAT, Series, TimePoint,
};
