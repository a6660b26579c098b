use log::{debug, trace, warn};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::clock::{Clock, MonotonicClock};
use crate::config::FormatOptions;
use crate::error::StatsError;
use crate::format;
use crate::model::{Outcome, StatsSnapshot};

/// Windows shorter than this are too short to measure a rate over.
pub const MIN_RATE_WINDOW: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u64,
    since: Instant,
}

/// Progress counter for a batch comparison run.
///
/// Workers share it by reference and record one outcome per item; a
/// reporter reads the derived metrics and calls `reset_snapshot` each tick
/// so that `rate` reflects recent throughput.
#[derive(Debug)]
pub struct ProgressCounter<C: Clock = MonotonicClock> {
    total: u64,
    start: Instant,
    same: AtomicU64,
    diff: AtomicU64,
    failed: AtomicU64,
    window: Mutex<Window>,
    options: FormatOptions,
    clock: C,
}

impl ProgressCounter<MonotonicClock> {
    /// Creates a counter expecting `total` items, starting the clock now
    pub fn new(total: u64) -> Self {
        Self::with_options(total, FormatOptions::default())
    }

    /// Creates a counter with custom text formatting
    pub fn with_options(total: u64, options: FormatOptions) -> Self {
        Self::with_clock(total, options, MonotonicClock)
    }
}

impl<C: Clock> ProgressCounter<C> {
    /// Creates a counter that reads time from `clock`
    pub fn with_clock(total: u64, options: FormatOptions, clock: C) -> Self {
        let start = clock.now();
        debug!("Starting progress counter for {} items", total);
        Self {
            total,
            start,
            same: AtomicU64::new(0),
            diff: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            window: Mutex::new(Window {
                count: 0,
                since: start,
            }),
            options,
            clock,
        }
    }

    /// Increments the counter matching `outcome`
    pub fn record(&self, outcome: Outcome) {
        match outcome {
            Outcome::Same => self.record_same(),
            Outcome::Diff => self.record_diff(),
            Outcome::Failed => self.record_failed(),
        }
    }

    /// Increments the same counter
    pub fn record_same(&self) {
        self.same.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the diff counter
    pub fn record_diff(&self) {
        self.diff.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the failed counter
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the expected number of items
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Gets the number of items with the same response
    pub fn same_count(&self) -> u64 {
        self.same.load(Ordering::Relaxed)
    }

    /// Gets the number of items with differing responses
    pub fn diff_count(&self) -> u64 {
        self.diff.load(Ordering::Relaxed)
    }

    /// Gets the number of failed items
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Sum of the three outcome counters.
    ///
    /// Each counter is loaded on its own, so while workers are still
    /// recording the sum may lag or lead the true total by a few items.
    pub fn processed(&self) -> u64 {
        self.same_count() + self.diff_count() + self.failed_count()
    }

    /// Gets the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(self.clock.now())
    }

    /// Percentage of `total` processed so far
    pub fn progress(&self) -> Result<f64, StatsError> {
        self.progress_at(self.processed())
    }

    /// Estimated time remaining, extrapolated from the lifetime average.
    ///
    /// Once `processed` reaches or passes `total` this is zero.
    pub fn time_left(&self) -> Result<Duration, StatsError> {
        let elapsed = self.elapsed();
        self.time_left_at(self.processed(), elapsed)
    }

    /// Items per second since the last `reset_snapshot`
    pub fn rate(&self) -> Result<f64, StatsError> {
        self.rate_at(self.processed(), self.clock.now())
    }

    /// Items per second since construction
    pub fn average_rate(&self) -> Result<f64, StatsError> {
        per_second(self.processed(), self.elapsed(), "average rate")
    }

    /// Starts a new rate window at the current count and time
    pub fn reset_snapshot(&self) {
        let mut window = self.window.lock();
        let count = self.processed();
        if count > self.total {
            warn!(
                "Processed count {} exceeds expected total {}",
                count, self.total
            );
        }
        window.count = count;
        window.since = self.clock.now();
        debug!("Rate window reset at {} processed", count);
    }

    /// Reads every counter and derived metric against a single clock reading
    pub fn snapshot(&self) -> StatsSnapshot {
        let same = self.same_count();
        let diff = self.diff_count();
        let failed = self.failed_count();
        let processed = same + diff + failed;
        let now = self.clock.now();
        let elapsed = self.elapsed_at(now);
        StatsSnapshot {
            total: self.total,
            same,
            diff,
            failed,
            processed,
            elapsed_secs: elapsed.as_secs_f64(),
            progress: self.progress_at(processed).ok(),
            eta_secs: self
                .time_left_at(processed, elapsed)
                .ok()
                .map(|d| d.as_secs_f64()),
            rate: self.rate_at(processed, now).ok(),
        }
    }

    /// Gets the formatting options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Elapsed time as whole seconds, e.g. `"12s"`
    pub fn time_cost_display(&self) -> String {
        format::seconds(Some(self.elapsed().as_secs_f64()), &self.options)
    }

    /// Time left as whole seconds, or the unknown placeholder
    pub fn time_left_display(&self) -> String {
        let secs = self.time_left().ok().map(|d| d.as_secs_f64());
        format::seconds(secs, &self.options)
    }

    /// Progress percentage, e.g. `"50.00%"`
    pub fn progress_display(&self) -> String {
        format::percent(self.progress().ok(), &self.options)
    }

    /// Recent throughput, e.g. `"33 req/s"`
    pub fn rate_display(&self) -> String {
        format::rate(self.rate().ok(), &self.options)
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    fn progress_at(&self, processed: u64) -> Result<f64, StatsError> {
        if self.total == 0 {
            trace!("progress undefined: total is zero");
            return Err(StatsError::undefined("progress", "total"));
        }
        Ok(processed as f64 / self.total as f64 * 100.0)
    }

    fn time_left_at(&self, processed: u64, elapsed: Duration) -> Result<Duration, StatsError> {
        if processed == 0 {
            trace!("time left undefined: nothing processed");
            return Err(StatsError::undefined("time left", "processed count"));
        }
        let remaining = self.total.saturating_sub(processed);
        let secs = remaining as f64 * elapsed.as_secs_f64() / processed as f64;
        Duration::try_from_secs_f64(secs).map_err(|e| StatsError::out_of_range("time left", e))
    }

    fn rate_at(&self, processed: u64, now: Instant) -> Result<f64, StatsError> {
        let window = *self.window.lock();
        let span = now.saturating_duration_since(window.since);
        per_second(processed.saturating_sub(window.count), span, "rate")
    }
}

fn per_second(count: u64, span: Duration, metric: &'static str) -> Result<f64, StatsError> {
    if span < MIN_RATE_WINDOW {
        trace!("{} undefined: window of {:?} is too short", metric, span);
        return Err(StatsError::undefined(metric, "time window"));
    }
    Ok(count as f64 / span.as_secs_f64())
}
