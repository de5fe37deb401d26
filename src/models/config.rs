//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::models::metrics::KsMethod;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First sample file
    #[serde(default)]
    pub sample1: PathBuf,

    /// Second sample file
    #[serde(default)]
    pub sample2: PathBuf,

    /// Zero-based column index read from both files
    #[serde(default = "default_column")]
    pub column: usize,

    /// Significance level for the verdict
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// How the p-value is computed
    #[serde(default)]
    pub method: KsMethod,

    /// Render the CDF chart after reporting
    #[serde(default = "default_plot")]
    pub plot: bool,

    /// Where the CDF chart is written
    #[serde(default = "default_plot_output")]
    pub plot_output: PathBuf,

    /// Emit the report as JSON instead of text
    #[serde(default)]
    pub json_output: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample1: PathBuf::new(),
            sample2: PathBuf::new(),
            column: default_column(),
            alpha: default_alpha(),
            method: KsMethod::default(),
            plot: default_plot(),
            plot_output: default_plot_output(),
            json_output: false,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a configuration for a pair of sample files
    pub fn for_samples<P: AsRef<Path>>(sample1: P, sample2: P) -> Self {
        Self {
            sample1: sample1.as_ref().to_path_buf(),
            sample2: sample2.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.sample1.as_os_str().is_empty() {
            return Err(AppError::config("Path for sample1 cannot be empty"));
        }

        if self.sample2.as_os_str().is_empty() {
            return Err(AppError::config("Path for sample2 cannot be empty"));
        }

        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(AppError::validation(format!(
                "Significance level must lie strictly between 0 and 1, got {}",
                self.alpha
            )));
        }

        if self.plot && self.plot_output.as_os_str().is_empty() {
            return Err(AppError::config("Plot output path cannot be empty"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        self.merge_from_lookup(|key| std::env::var(key).ok())
    }

    /// Merge settings from any key/value source using the environment variable names
    pub fn merge_from_lookup<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(column) = lookup("KS_COLUMN") {
            self.column = column.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid KS_COLUMN value '{}': {}", column, e)))?;
        }

        if let Some(alpha) = lookup("KS_ALPHA") {
            self.alpha = alpha.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid KS_ALPHA value '{}': {}", alpha, e)))?;
        }

        if let Some(method) = lookup("KS_METHOD") {
            self.method = KsMethod::from_str(&method)
                .map_err(|e| AppError::config(format!("Invalid KS_METHOD value '{}': {}", method, e)))?;
        }

        if let Some(plot_output) = lookup("KS_PLOT_OUTPUT") {
            let trimmed = plot_output.trim();
            if !trimmed.is_empty() {
                self.plot_output = PathBuf::from(trimmed);
            }
        }

        if let Some(noplot) = lookup("KS_NOPLOT") {
            let noplot: bool = noplot.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid KS_NOPLOT value '{}': {}", noplot, e)))?;
            self.plot = !noplot;
        }

        if let Some(enable_color) = lookup("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_column() -> usize {
    crate::defaults::DEFAULT_COLUMN
}

fn default_alpha() -> f64 {
    crate::defaults::DEFAULT_ALPHA
}

fn default_plot() -> bool {
    true
}

fn default_plot_output() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_PLOT_OUTPUT)
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
