//! Augur-specific data transfer objects, configuration primitives and the shared error type.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;
mod series;

pub use config::{AlignSearch, AnchorMode, AugurConfig};
pub use error::AugurError;
pub use reports::{ComparisonRow, Evaluation};
pub use series::{Series, TimePoint};

/// `strftime` pattern used whenever an instant is shown to a person.
pub const PRETTY_TIME_FORMAT: &str = "%Y/%m/%d, %H:%M:%S";
