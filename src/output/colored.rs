//! Colored formatter implementation with terminal color support

use super::formatter::{report_lines, verbose_details, FormattingOptions, OutputFormatter};
use super::Report;
use crate::{error::Result, models::Verdict};
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

/// Color scheme for the report
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub label: Color,
    pub significant: Color,
    pub not_significant: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            label: Color::Cyan,
            significant: Color::Red,
            not_significant: Color::Green,
            warning: Color::Yellow,
            info: Color::BrightBlack,
        }
    }
}

/// Formatter that highlights the numbers and the verdict
pub struct ColoredFormatter {
    options: FormattingOptions,
    scheme: ColorScheme,
}

impl ColoredFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            scheme: ColorScheme::default(),
        }
    }

    fn verdict_color(&self, verdict: Verdict) -> Color {
        if verdict.is_significant() {
            self.scheme.significant
        } else {
            self.scheme.not_significant
        }
    }

    /// Color the value after " = " and keep the label readable
    fn highlight_value(&self, line: &str) -> String {
        match line.split_once(" = ") {
            Some((label, value)) => format!("{} = {}", label.color(self.scheme.label), value.bold()),
            None => line.to_string(),
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let (column, statistic, p_value) = report_lines(report);
        let mut output = String::new();
        let _ = writeln!(output, "{}", column.color(self.scheme.info));
        let _ = writeln!(output, "{}", self.highlight_value(&statistic));
        let _ = writeln!(output, "{}", self.highlight_value(&p_value));
        let _ = write!(
            output,
            "{}",
            report.verdict.message().color(self.verdict_color(report.verdict)).bold()
        );

        if self.options.verbose_mode {
            let _ = write!(output, "\n{}", verbose_details(report).color(self.scheme.info));
        }

        Ok(output)
    }

    fn format_plot_notice(&self, path: &Path) -> Result<String> {
        Ok(format!(
            "{} {}",
            "CDF plot written to".color(self.scheme.info),
            path.display().to_string().underline()
        ))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "Warning:".color(self.scheme.warning).bold(), warning))
    }
}
