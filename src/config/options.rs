use serde::{Deserialize, Serialize};

/// Options for controlling how statistics are rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Decimal places shown in the progress percentage
    pub progress_decimals: usize,

    /// Unit appended to the throughput rate
    pub rate_unit: String,

    /// Placeholder rendered when a metric cannot be computed yet
    pub unknown: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            progress_decimals: 2,
            rate_unit: "req/s".to_string(),
            unknown: "unknown".to_string(),
        }
    }
}

/// Builder pattern for FormatOptions
pub struct FormatOptionsBuilder {
    options: FormatOptions,
}

impl FormatOptionsBuilder {
    /// Creates a new FormatOptionsBuilder with default values
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
        }
    }

    /// Sets the number of decimals in the progress percentage
    pub fn progress_decimals(mut self, decimals: usize) -> Self {
        self.options.progress_decimals = decimals;
        self
    }

    /// Sets the rate unit
    pub fn rate_unit(mut self, unit: impl Into<String>) -> Self {
        self.options.rate_unit = unit.into();
        self
    }

    /// Sets the placeholder for undefined metrics
    pub fn unknown(mut self, placeholder: impl Into<String>) -> Self {
        self.options.unknown = placeholder.into();
        self
    }

    /// Builds the FormatOptions
    pub fn build(self) -> FormatOptions {
        self.options
    }
}

impl Default for FormatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
