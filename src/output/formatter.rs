//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! the plain text and JSON implementations.

use super::Report;
use crate::error::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format the complete test report
    fn format_report(&self, report: &Report) -> Result<String>;

    /// Format the notice printed after the plot is written
    fn format_plot_notice(&self, path: &Path) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone, Default)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Include per-sample summaries and the p-value method
    pub verbose_mode: bool,
}

/// Format a value the way C's `%.Ne` does: `1.2340e+00`, `5.0000e-12`
///
/// Rust's `{:e}` prints `1.234e0`; the exponent here always carries a sign
/// and at least two digits.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => raw,
    }
}

/// Lines shared by every text formatter, without styling
pub(crate) fn report_lines(report: &Report) -> (String, String, String) {
    (
        format!("Will read column {} from the data files", report.column + 1),
        format!("KS statistic = {:.4}", report.statistic),
        format!("p-value = {}", format_scientific(report.p_value, 4)),
    )
}

/// Verbose detail block shared by the text formatters
pub(crate) fn verbose_details(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(output);
    let _ = writeln!(output, "p-value method: {} (alpha = {})", report.method, report.alpha);
    for summary in &report.samples {
        let _ = writeln!(
            output,
            "  {}: n = {}, min = {:.4}, max = {:.4}, mean = {:.4}, median = {:.4}",
            summary.label, summary.count, summary.min, summary.max, summary.mean, summary.median
        );
    }
    output.trim_end().to_string()
}

/// Plain text formatter without colors
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let (column, statistic, p_value) = report_lines(report);
        let mut output = String::new();
        let _ = writeln!(output, "{}", column);
        let _ = writeln!(output, "{}", statistic);
        let _ = writeln!(output, "{}", p_value);
        let _ = write!(output, "{}", report.verdict.message());

        if self.options.verbose_mode {
            let _ = write!(output, "\n{}", verbose_details(report));
        }

        Ok(output)
    }

    fn format_plot_notice(&self, path: &Path) -> Result<String> {
        Ok(format!("CDF plot written to {}", path.display()))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("Warning: {}", warning))
    }
}

/// JSON formatter for scripting
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_plot_notice(&self, path: &Path) -> Result<String> {
        Ok(serde_json::json!({ "plot": path.display().to_string() }).to_string())
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(serde_json::json!({ "warning": warning }).to_string())
    }
}
