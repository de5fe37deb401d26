//! Environment variable handling and .env file management

use crate::{
    error::{AppError, Result},
    logging::Logger,
    models::Config,
};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load `.env` from the working directory if it exists
    pub fn load_env_file(logger: &Logger) -> Result<bool> {
        Self::load_env_from(Path::new(".env"), logger)
    }

    /// Load a dotenv file; variables already set in the process win
    pub fn load_env_from(path: &Path, logger: &Logger) -> Result<bool> {
        if !path.exists() {
            logger.debug("No .env file found, using defaults and CLI arguments")
                .field("path", path.display().to_string())
                .log();
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

        logger.debug("Loaded configuration from env file")
            .field("path", path.display().to_string())
            .log();
        Ok(true)
    }

    /// Check a single variable the same way the config merge will
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        let mut probe = Config::for_samples("sample1", "sample2");
        probe.merge_from_lookup(|name| (name == key).then(|| value.to_string()))?;

        if key == "KS_ALPHA" && !(probe.alpha > 0.0 && probe.alpha < 1.0) {
            return Err(AppError::config(format!(
                "KS_ALPHA must lie strictly between 0 and 1, got: {}",
                value
            )));
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("KS_COLUMN", "Zero-based column read from both files", "1"),
            ("KS_ALPHA", "Significance level (0 < alpha < 1)", "0.05"),
            ("KS_METHOD", "p-value method: auto, exact or asymp", "auto"),
            ("KS_PLOT_OUTPUT", "Path of the CDF chart", "ks_cdf.svg"),
            ("KS_NOPLOT", "Skip the CDF chart", "false"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
        ]
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        Self::get_supported_env_vars()
            .into_iter()
            .filter_map(|(name, _, _)| {
                let value = std::env::var(name).ok()?;
                Self::validate_env_var(name, &value).err().map(|e| e.to_string())
            })
            .collect()
    }

    /// Check the lines of a dotenv file, returning one message per bad entry
    pub fn check_env_content(content: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().trim_start_matches("export ").trim();
                let value = value.trim().trim_matches('"');

                if let Err(e) = Self::validate_env_var(key, value) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        warnings
    }

    /// Check if .env file exists and validate its contents
    pub fn check_env_file() -> Result<Option<Vec<String>>> {
        let path = Path::new(".env");
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("Failed to read .env file: {}", e)))?;

        Ok(Some(Self::check_env_content(&content)))
    }
}
