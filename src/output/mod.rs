//! Output formatting and display system
//!
//! Turns a KS test result into the report printed on stdout, as plain text,
//! colored text or JSON.

mod colored;
mod formatter;

pub use self::colored::{ColorScheme, ColoredFormatter};
pub use formatter::{format_scientific, FormattingOptions, JsonFormatter, OutputFormatter, PlainFormatter};

use crate::models::{Config, KsTestResult, PValueMethod, Sample, SampleSummary, Verdict};
use serde::{Deserialize, Serialize};

/// Everything the reporter prints for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Zero-based column index that was read
    pub column: usize,
    pub sample1: String,
    pub sample2: String,
    pub statistic: f64,
    pub p_value: f64,
    pub method: PValueMethod,
    pub alpha: f64,
    pub verdict: Verdict,
    /// Per-sample summaries, filled in verbose mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<SampleSummary>,
}

impl Report {
    /// Assemble the report for a finished test
    pub fn new(config: &Config, first: &Sample, second: &Sample, result: &KsTestResult) -> Self {
        let samples = if config.verbose {
            vec![first.summary(), second.summary()]
        } else {
            Vec::new()
        };

        Self {
            column: config.column,
            sample1: first.source().display().to_string(),
            sample2: second.source().display().to_string(),
            statistic: result.statistic,
            p_value: result.p_value,
            method: result.method,
            alpha: config.alpha,
            verdict: result.verdict(config.alpha),
            samples,
        }
    }
}

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on output mode and color support
    pub fn create_formatter(enable_color: bool, verbose: bool, json: bool) -> Box<dyn OutputFormatter> {
        if json {
            return Box::new(JsonFormatter);
        }

        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a formatter from the run configuration
    pub fn from_config(config: &Config) -> Box<dyn OutputFormatter> {
        Self::create_formatter(config.enable_color, config.verbose, config.json_output)
    }
}
