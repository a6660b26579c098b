use std::time::TryFromFloatSecsError;
use thiserror::Error;

/// Errors produced when reading derived metrics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A derived metric was requested while its denominator is zero.
    #[error("cannot compute {metric}: {denominator} is zero")]
    UndefinedRatio {
        metric: &'static str,
        denominator: &'static str,
    },

    /// A derived duration is too large to represent.
    #[error("{metric} does not fit in a duration: {reason}")]
    OutOfRange {
        metric: &'static str,
        reason: String,
    },
}

impl StatsError {
    /// Builds an `UndefinedRatio` error
    pub fn undefined(metric: &'static str, denominator: &'static str) -> Self {
        StatsError::UndefinedRatio {
            metric,
            denominator,
        }
    }

    /// Builds an `OutOfRange` error from a failed float-to-duration conversion
    pub fn out_of_range(metric: &'static str, source: TryFromFloatSecsError) -> Self {
        StatsError::OutOfRange {
            metric,
            reason: source.to_string(),
        }
    }

    /// True when the metric is merely unknown yet rather than broken.
    pub fn is_undefined(&self) -> bool {
        matches!(self, StatsError::UndefinedRatio { .. })
    }
}
