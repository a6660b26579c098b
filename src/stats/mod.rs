pub mod clock;
pub mod counter;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use counter::{ProgressCounter, MIN_RATE_WINDOW};
