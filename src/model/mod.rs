pub mod types;

pub use types::{Outcome, StatsSnapshot};
