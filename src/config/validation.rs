//! Configuration validation utilities and rules

use crate::{error::Result, models::Config};
use colored::*;
use std::path::Path;

/// Alpha below this is accepted but flagged
const TINY_ALPHA: f64 = 0.001;

/// Configuration validator with advisory checks beyond `Config::validate`
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        config.validate()?;

        let mut warnings = Vec::new();
        warnings.extend(Self::validate_sample_paths(config));
        warnings.extend(Self::validate_significance(config));
        warnings.extend(Self::validate_plot_settings(config));

        Ok(warnings)
    }

    /// The loader reports the real error; this only flags it early
    fn validate_sample_paths(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for path in [&config.sample1, &config.sample2] {
            if !path.exists() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!("Sample file '{}' does not exist", path.display()),
                ));
            } else if path.is_dir() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!("Sample path '{}' is a directory", path.display()),
                ));
            }
        }

        if config.sample1 == config.sample2 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Both samples read from '{}'; D will be 0", config.sample1.display()),
            ));
        }

        warnings
    }

    fn validate_significance(config: &Config) -> Vec<ValidationWarning> {
        if config.alpha < TINY_ALPHA {
            vec![ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Significance level {} is very small; almost no difference will be reported", config.alpha),
            )]
        } else {
            Vec::new()
        }
    }

    fn validate_plot_settings(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        if !config.plot {
            return warnings;
        }

        let is_svg = config
            .plot_output
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if !is_svg {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Plot '{}' will be written as SVG regardless of its extension", config.plot_output.display()),
            ));
        }

        if let Some(parent) = config.plot_output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !Path::new(parent).is_dir() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Error,
                    format!("Plot directory '{}' does not exist", parent.display()),
                ));
            }
        }

        if config.json_output {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "JSON output is enabled; the plot location is logged instead of printed".to_string(),
            ));
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Get color for terminal display
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            format!("{} {}", tag.color(self.level.color()).bold(), self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn existing_samples(dir: &TempDir) -> Config {
        let a = dir.path().join("a.dat");
        let b = dir.path().join("b.dat");
        std::fs::write(&a, "0 1.0\n").unwrap();
        std::fs::write(&b, "0 2.0\n").unwrap();
        let mut config = Config::for_samples(a, b);
        config.plot_output = dir.path().join("cdf.svg");
        config
    }

    #[test]
    fn test_validation_warning() {
        let warning = ValidationWarning::new(ValidationLevel::Warning, "Test warning message".to_string());

        let formatted = warning.format(false);
        assert_eq!(formatted, "[WARNING] Test warning message");
    }

    #[test]
    fn test_validation_levels() {
        assert_eq!(ValidationLevel::Info.as_str(), "INFO");
        assert_eq!(ValidationLevel::Warning.as_str(), "WARNING");
        assert_eq!(ValidationLevel::Error.as_str(), "ERROR");
        assert_eq!(ValidationLevel::Error.color(), Color::Red);
    }

    #[test]
    fn test_clean_configuration_has_no_warnings() {
        let dir = TempDir::new().unwrap();
        let config = existing_samples(&dir);
        assert!(validate_config(&config).unwrap().is_empty());
    }

    #[test]
    fn test_missing_sample_file() {
        let dir = TempDir::new().unwrap();
        let mut config = existing_samples(&dir);
        config.sample2 = dir.path().join("missing.dat");

        let warnings = validate_config(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, ValidationLevel::Warning);
        assert!(warnings[0].message.contains("missing.dat"));
    }

    #[test]
    fn test_same_file_twice() {
        let dir = TempDir::new().unwrap();
        let mut config = existing_samples(&dir);
        config.sample2 = config.sample1.clone();

        let warnings = validate_config(&config).unwrap();
        assert!(warnings.iter().any(|w| w.level == ValidationLevel::Info && w.message.contains("D will be 0")));
    }

    #[test]
    fn test_tiny_alpha() {
        let dir = TempDir::new().unwrap();
        let mut config = existing_samples(&dir);
        config.alpha = 1e-6;

        let warnings = validate_config(&config).unwrap();
        assert!(warnings.iter().any(|w| w.message.contains("very small")));
    }

    #[test]
    fn test_plot_settings() {
        let dir = TempDir::new().unwrap();
        let mut config = existing_samples(&dir);
        config.plot_output = dir.path().join("nowhere").join("cdf.png");
        config.json_output = true;

        let warnings = validate_config(&config).unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.level == ValidationLevel::Error));

        config.plot = false;
        assert!(validate_config(&config).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut config = Config::for_samples("a.dat", "b.dat");
        config.alpha = 0.0;
        assert!(validate_config(&config).is_err());

        config = Config::for_samples(PathBuf::new(), PathBuf::from("b.dat"));
        assert!(validate_config(&config).is_err());
    }
}
