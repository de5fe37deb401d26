//! Data models and structures for the distance KS tester

pub mod config;
pub mod metrics;
pub mod sample;

// Re-export main model types
pub use config::Config;
pub use metrics::{KsMethod, KsTestResult, PValueMethod, Verdict};
pub use sample::{CdfCurve, Sample, SampleSummary};
