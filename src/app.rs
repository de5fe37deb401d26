//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config, EnvManager, ValidationLevel},
    data::load_sample,
    error::{ErrorContext, Result},
    logging::{Logger, PerformanceLogger},
    models::{Config, Sample},
    output::{OutputFormatter, OutputFormatterFactory, Report},
    plot::render_cdf_plot,
    stats::{cdf_curve, KsTest},
};
use std::io::{self, Write};

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    logger: Logger,
}

impl App {
    /// Create a new application instance from CLI arguments
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self::from_config(load_config(cli)?))
    }

    /// Create an application instance from a finished configuration
    pub fn from_config(config: Config) -> Self {
        let logger = Logger::with_config("APP", &config);
        Self { config, logger }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline, printing the report on stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Load, test, report, then plot unless disabled
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = &self.config;

        let formatter = OutputFormatterFactory::from_config(config);

        if config.debug {
            self.log_debug_info();
        }
        self.report_warnings(formatter.as_ref())?;

        let mut perf = PerformanceLogger::new(config);

        perf.start_timing("load");
        let first = load_sample(&config.sample1, config.column)?;
        let second = load_sample(&config.sample2, config.column)?;
        perf.end_timing("load");

        self.logger.info("Samples loaded")
            .field("column", config.column)
            .field("n1", first.len())
            .field("n2", second.len())
            .log();

        perf.start_timing("ks_test");
        let test = KsTest::new(config.method);
        let result = test.compare(&first, &second)?;
        perf.end_timing("ks_test");

        if test.fell_back(&result) {
            self.logger.warn("Samples too large for the exact p-value, used the asymptotic distribution")
                .field("n1", result.n1)
                .field("n2", result.n2)
                .field("max_cells", crate::defaults::EXACT_MAX_LATTICE_CELLS)
                .log();
        }

        let report = Report::new(config, &first, &second, &result);
        writeln!(out, "{}", formatter.format_report(&report)?)?;

        if config.plot {
            perf.start_timing("plot");
            self.plot(&first, &second)?;
            perf.end_timing("plot");

            if config.json_output {
                self.logger.info("CDF plot written")
                    .field("path", config.plot_output.display().to_string())
                    .log();
            } else {
                writeln!(out, "{}", formatter.format_plot_notice(&config.plot_output)?)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn plot(&self, first: &Sample, second: &Sample) -> Result<()> {
        let curves = [cdf_curve(first), cdf_curve(second)];
        render_cdf_plot(&curves, &self.config.plot_output).context("Rendering CDF plot")
    }

    /// Print configuration warnings on stderr; info notes only in verbose mode
    fn report_warnings(&self, formatter: &dyn OutputFormatter) -> Result<()> {
        for warning in validate_config(&self.config)? {
            match warning.level {
                ValidationLevel::Info if self.config.verbose => {
                    eprintln!("{}", warning.format(self.config.enable_color));
                }
                ValidationLevel::Info => {}
                ValidationLevel::Warning | ValidationLevel::Error => {
                    eprintln!("{}", formatter.format_warning(&warning.message)?);
                }
            }
        }

        Ok(())
    }

    fn log_debug_info(&self) {
        self.logger.debug(&format!("{} v{}", crate::PKG_NAME, crate::VERSION))
            .field("build_time", crate::BUILD_TIME)
            .field("git_commit", crate::GIT_COMMIT)
            .field("target", crate::TARGET_TRIPLE)
            .log();

        for line in display_config_summary(&self.config).lines() {
            self.logger.debug(line).log();
        }

        for problem in EnvManager::validate_current_env() {
            self.logger.warn(&problem).field("source", "environment").log();
        }

        match EnvManager::check_env_file() {
            Ok(Some(problems)) => {
                for problem in problems {
                    self.logger.warn(&problem).field("source", ".env").log();
                }
            }
            Ok(None) => {}
            Err(e) => self.logger.warn("Could not check .env file").error_info(&e).log(),
        }
    }
}
