//! Command-line interface module
//!
//! Flags are documented in their single-dash form (`-sample1 PATH`). Those
//! spellings are rewritten to clap's `--sample1` before parsing, so both forms
//! are accepted.

use clap::Parser;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Long flag names accepted with a single leading dash
pub const LEGACY_LONG_FLAGS: &[&str] = &[
    "sample1",
    "sample2",
    "column",
    "noplot",
    "alpha",
    "method",
    "plot-output",
    "json",
    "verbose",
    "debug",
    "color",
    "no-color",
    "help",
    "version",
];

/// Two-sample KS test for comparing two sets of distance distributions from two MD simulations
#[derive(Parser, Debug, Clone)]
#[command(name = "dkt")]
#[command(version, about, long_about = None)]
#[command(after_help = "Unless -noplot is given, both empirical CDFs are saved as an SVG file (ks_cdf.svg by default).")]
pub struct Cli {
    /// Path to the first distance data file
    #[arg(long, value_name = "PATH")]
    pub sample1: PathBuf,

    /// Path to the second distance data file
    #[arg(long, value_name = "PATH")]
    pub sample2: PathBuf,

    /// Column index (starts with 0) to read from each file [default: 1, the second column]
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Skip writing the CDF plot file
    #[arg(long)]
    pub noplot: bool,

    /// Significance level for the verdict [default: 0.05]
    #[arg(long, value_name = "A")]
    pub alpha: Option<f64>,

    /// p-value method: auto, exact or asymp [default: auto]
    #[arg(long, value_name = "METHOD")]
    pub method: Option<String>,

    /// SVG file the CDF plot is written to on every run without -noplot [default: ks_cdf.svg]
    #[arg(long = "plot-output", value_name = "PATH")]
    pub plot_output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    /// Fallible variant of [`Cli::parse_normalized`] for arbitrary arguments
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_args(args))
    }

    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let Some(alpha) = self.alpha {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(format!("-alpha must lie strictly between 0 and 1, got {}", alpha));
            }
        }

        Ok(())
    }

    /// Explicit color choice from the command line, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        self.color_override().unwrap_or_else(supports_color)
    }
}

/// Rewrite `-sample1`, `-column=2`, ... into their double-dash form
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|text| {
                let body = text.strip_prefix('-')?;
                if body.starts_with('-') {
                    return None;
                }
                let name = body.split('=').next().unwrap_or(body);
                LEGACY_LONG_FLAGS.contains(&name).then(|| format!("-{}", text))
            });
            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    std::io::stdout().is_terminal()
}
