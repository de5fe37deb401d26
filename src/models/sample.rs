//! Sample data models

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One column of distances loaded from a data file
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    source: PathBuf,
    column: usize,
    values: Vec<f64>,
}

impl Sample {
    /// Wrap loaded values, rejecting empty samples
    pub fn new<P: AsRef<Path>>(source: P, column: usize, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(AppError::statistics(format!(
                "No data rows found in column {} of '{}'",
                column,
                source.as_ref().display()
            )));
        }

        Ok(Self {
            source: source.as_ref().to_path_buf(),
            column,
            values,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Short label for legends and summaries: the file name, or the full path
    pub fn label(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Values sorted ascending
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Descriptive statistics for verbose reports
    pub fn summary(&self) -> SampleSummary {
        let sorted = self.sorted_values();
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        SampleSummary {
            label: self.label(),
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
        }
    }
}

/// Descriptive statistics of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Empirical CDF coordinates of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct CdfCurve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl CdfCurve {
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.0;
        let last = self.points.last()?.0;
        Some((first, last))
    }
}
