//! Thread-safe progress statistics for long-running batch comparisons.
//!
//! A [`ProgressCounter`] is created with the expected number of items and
//! shared by reference among workers, each recording whether its item came
//! out the same, different, or failed. Progress, elapsed time, ETA and
//! recent throughput are derived on read.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod stats;

pub use config::{FormatOptions, FormatOptionsBuilder};
pub use error::StatsError;
pub use model::{Outcome, StatsSnapshot};
pub use stats::{Clock, ManualClock, MonotonicClock, ProgressCounter};
