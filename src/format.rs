//! Text rendering of counter metrics.
//!
//! Whole seconds as `"12s"`, progress as `"50.00%"`, throughput as
//! `"33 req/s"`. A `None` metric renders as the configured placeholder.

use crate::config::FormatOptions;

pub fn seconds(secs: Option<f64>, options: &FormatOptions) -> String {
    match secs {
        Some(secs) => format!("{:.0}s", secs),
        None => options.unknown.clone(),
    }
}

pub fn percent(pct: Option<f64>, options: &FormatOptions) -> String {
    match pct {
        Some(pct) => format!("{:.*}%", options.progress_decimals, pct),
        None => options.unknown.clone(),
    }
}

pub fn rate(per_sec: Option<f64>, options: &FormatOptions) -> String {
    match per_sec {
        Some(per_sec) => format!("{:.0} {}", per_sec, options.rate_unit),
        None => options.unknown.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_have_no_decimals() {
        let options = FormatOptions::default();
        assert_eq!(seconds(Some(0.0), &options), "0s");
        assert_eq!(seconds(Some(59.4), &options), "59s");
        assert_eq!(seconds(Some(59.6), &options), "60s");
        // exact halves round to even
        assert_eq!(seconds(Some(0.5), &options), "0s");
        assert_eq!(seconds(Some(2.5), &options), "2s");
        assert_eq!(seconds(None, &options), "unknown");
    }

    #[test]
    fn test_percent_decimals() {
        let options = FormatOptions::default();
        assert_eq!(percent(Some(50.0), &options), "50.00%");
        assert_eq!(percent(Some(100.0 / 3.0), &options), "33.33%");

        let coarse = FormatOptions {
            progress_decimals: 0,
            ..FormatOptions::default()
        };
        assert_eq!(percent(Some(12.7), &coarse), "13%");
    }

    #[test]
    fn test_rate_unit() {
        let options = FormatOptions::default();
        assert_eq!(rate(Some(41.7), &options), "42 req/s");
        assert_eq!(rate(None, &options), "unknown");
    }
}
