use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FormatOptions;
use crate::format;

/// Result of comparing one work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Both sides produced the same response
    Same,
    /// The responses differ
    Diff,
    /// The comparison could not be completed
    Failed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Same => "same",
            Outcome::Diff => "diff",
            Outcome::Failed => "failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time read-out of a `ProgressCounter`.
///
/// Ratio metrics that cannot be computed yet are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub same: u64,
    pub diff: u64,
    pub failed: u64,
    pub processed: u64,
    pub elapsed_secs: f64,
    /// Percentage in `[0, 100]` under correct usage
    pub progress: Option<f64>,
    pub eta_secs: Option<f64>,
    /// Items per second since the last snapshot reset
    pub rate: Option<f64>,
}

impl StatsSnapshot {
    /// Renders the snapshot as a single status line
    pub fn render(&self, options: &FormatOptions) -> String {
        format!(
            "{}/{} ({}) same={} diff={} failed={} elapsed={} eta={} rate={}",
            self.processed,
            self.total,
            format::percent(self.progress, options),
            self.same,
            self.diff,
            self.failed,
            format::seconds(Some(self.elapsed_secs), options),
            format::seconds(self.eta_secs, options),
            format::rate(self.rate, options),
        )
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FormatOptions::default()))
    }
}
