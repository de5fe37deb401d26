//! Two-sample Kolmogorov-Smirnov test and empirical CDF helpers

pub mod asymptotic;
pub mod exact;

use crate::{
    defaults::{EXACT_MAX_LATTICE_CELLS, EXACT_MAX_SAMPLE_SIZE},
    error::{AppError, Result},
    models::{CdfCurve, KsMethod, KsTestResult, PValueMethod, Sample},
};

/// Two-sample KS test runner
#[derive(Debug, Clone)]
pub struct KsTest {
    /// Requested p-value method
    method: KsMethod,
    /// Largest sample size for which `Auto` still picks the exact method
    exact_limit: usize,
    /// Largest `n1 * n2` lattice the exact walk may visit, for any method
    exact_max_cells: u64,
}

impl Default for KsTest {
    fn default() -> Self {
        Self::new(KsMethod::Auto)
    }
}

impl KsTest {
    pub fn new(method: KsMethod) -> Self {
        Self {
            method,
            exact_limit: EXACT_MAX_SAMPLE_SIZE,
            exact_max_cells: EXACT_MAX_LATTICE_CELLS,
        }
    }

    pub fn with_exact_limit(mut self, exact_limit: usize) -> Self {
        self.exact_limit = exact_limit;
        self
    }

    pub fn with_exact_max_cells(mut self, exact_max_cells: u64) -> Self {
        self.exact_max_cells = exact_max_cells;
        self
    }

    /// Whether the exact method is attempted for samples of these sizes
    pub fn selects_exact(&self, n1: usize, n2: usize) -> bool {
        match self.method {
            KsMethod::Exact => true,
            KsMethod::Asymp => false,
            KsMethod::Auto => n1.max(n2) <= self.exact_limit,
        }
    }

    /// Whether an exact request was answered with the asymptotic distribution
    pub fn fell_back(&self, result: &KsTestResult) -> bool {
        self.selects_exact(result.n1, result.n2) && result.method == PValueMethod::Asymptotic
    }

    /// Compare two loaded samples
    pub fn compare(&self, first: &Sample, second: &Sample) -> Result<KsTestResult> {
        self.run(first.values(), second.values())
    }

    /// Compute the KS statistic and its two-sided p-value
    pub fn run(&self, first: &[f64], second: &[f64]) -> Result<KsTestResult> {
        let sorted_first = sorted_checked(first, "first")?;
        let sorted_second = sorted_checked(second, "second")?;

        let (n1, n2) = (sorted_first.len(), sorted_second.len());
        let statistic = ks_statistic_sorted(&sorted_first, &sorted_second);

        let exact_p = if self.selects_exact(n1, n2) {
            self.exact_p_value(n1, n2, statistic)
        } else {
            None
        };
        let (p_value, method) = match exact_p {
            Some(p) => (p, PValueMethod::Exact),
            None => (asymptotic::two_sided_p_value(n1, n2, statistic), PValueMethod::Asymptotic),
        };

        Ok(KsTestResult {
            statistic,
            p_value: p_value.clamp(0.0, 1.0),
            method,
            n1,
            n2,
        })
    }

    /// Exact p-value, or `None` when the lattice is too large to walk
    fn exact_p_value(&self, n1: usize, n2: usize, statistic: f64) -> Option<f64> {
        let cells = (n1 as u64).saturating_mul(n2 as u64);
        if cells > self.exact_max_cells {
            return None;
        }
        Some(exact::two_sided_p_value(n1, n2, statistic))
    }
}

/// Run the test with automatic method selection
pub fn ks_2samp(first: &[f64], second: &[f64]) -> Result<KsTestResult> {
    KsTest::default().run(first, second)
}

/// `sup_x |F1(x) - F2(x)|` for two ascending slices
///
/// At each distinct value every tied observation in both samples is consumed
/// before the gap is measured, so identical samples give exactly zero.
pub fn ks_statistic_sorted(first: &[f64], second: &[f64]) -> f64 {
    let (n1, n2) = (first.len() as f64, second.len() as f64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut max_gap = 0.0f64;

    while i < first.len() && j < second.len() {
        let x = first[i].min(second[j]);
        while i < first.len() && first[i] <= x {
            i += 1;
        }
        while j < second.len() && second[j] <= x {
            j += 1;
        }
        max_gap = max_gap.max((i as f64 / n1 - j as f64 / n2).abs());
    }

    max_gap
}

/// Empirical CDF coordinates: sorted values paired with rank / n
pub fn ecdf(values: &[f64]) -> Vec<(f64, f64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, x)| (x, (rank + 1) as f64 / n))
        .collect()
}

/// Empirical CDF curve of a sample, labeled with its file name
pub fn cdf_curve(sample: &Sample) -> CdfCurve {
    CdfCurve {
        label: sample.label(),
        points: ecdf(sample.values()),
    }
}

fn sorted_checked(values: &[f64], which: &str) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(AppError::statistics(format!("The {} sample is empty", which)));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(AppError::statistics(format!(
            "The {} sample contains a non-finite value ({})",
            which, bad
        )));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}
