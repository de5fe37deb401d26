//! Distance KS Tester
//!
//! Compares two distance distributions from molecular-dynamics simulations
//! with the two-sample Kolmogorov-Smirnov test, and optionally draws the
//! empirical CDFs of both samples.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod plot;
pub mod stats;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{CdfCurve, Config, KsMethod, KsTestResult, PValueMethod, Sample, Verdict};
pub use output::{OutputFormatter, OutputFormatterFactory, Report};
pub use stats::{ecdf, ks_2samp, KsTest};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Build metadata stamped by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: &str = env!("GIT_COMMIT");
pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");

/// Default configuration values
pub mod defaults {
    /// Second column, zero-based
    pub const DEFAULT_COLUMN: usize = 1;
    pub const DEFAULT_ALPHA: f64 = 0.05;
    pub const DEFAULT_PLOT_OUTPUT: &str = "ks_cdf.svg";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
    /// Comment marker of GROMACS .xvg files
    pub const COMMENT_MARKER: &str = "#!";
    /// `auto` switches to the asymptotic p-value above this sample size
    pub const EXACT_MAX_SAMPLE_SIZE: usize = 10_000;
    /// Largest `n1 * n2` the exact walk visits, even with `-method exact`
    pub const EXACT_MAX_LATTICE_CELLS: u64 = 100_000_000;
}
