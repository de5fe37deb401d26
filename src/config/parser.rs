//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::{AppError, Result},
    logging::{LogLevel, Logger},
    models::{Config, KsMethod},
};
use std::str::FromStr;

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
    logger: Logger,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        let mut logger = Logger::new("CONFIG");
        if cli.debug {
            logger.set_level(LogLevel::Debug);
        }
        Self { cli, logger }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        EnvManager::load_env_file(&self.logger)?;
        self.build(|key| std::env::var(key).ok())
    }

    /// Build the configuration from defaults, a variable source and the CLI
    pub fn build<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        config.merge_from_lookup(lookup)?;
        self.apply_cli_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) -> Result<()> {
        config.sample1 = self.cli.sample1.clone();
        config.sample2 = self.cli.sample2.clone();

        if let Some(column) = self.cli.column {
            config.column = column;
        }

        if let Some(alpha) = self.cli.alpha {
            config.alpha = alpha;
        }

        if let Some(ref method) = self.cli.method {
            config.method = KsMethod::from_str(method)
                .map_err(|e| AppError::validation(format!("Invalid -method: {}", e)))?;
        }

        if let Some(ref plot_output) = self.cli.plot_output {
            config.plot_output = plot_output.clone();
        }

        if self.cli.noplot {
            config.plot = false;
        }

        config.enable_color = match self.cli.color_override() {
            Some(forced) => forced,
            None => config.enable_color && self.cli.use_colors(),
        };

        // CLI-only switches
        config.json_output = self.cli.json;
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        self.logger.debug("Applied CLI overrides to configuration")
            .field("column", config.column)
            .field("alpha", config.alpha)
            .field("method", config.method.to_string())
            .field("plot", config.plot)
            .field("enable_color", config.enable_color)
            .log();

        Ok(())
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Sample 1: {}", config.sample1.display()));
    summary.push(format!("Sample 2: {}", config.sample2.display()));
    summary.push(format!("Column: {} (zero-based)", config.column));
    summary.push(format!("Alpha: {}", config.alpha));
    summary.push(format!("Method: {}", config.method));
    if config.plot {
        summary.push(format!("Plot: {}", config.plot_output.display()));
    } else {
        summary.push("Plot: disabled".to_string());
    }
    summary.push(format!("JSON Output: {}", config.json_output));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
