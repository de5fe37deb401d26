//! KS test result data models

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested strategy for computing the p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KsMethod {
    /// Exact for moderate sample sizes, asymptotic beyond
    #[default]
    Auto,
    /// Exact finite-sample null distribution
    Exact,
    /// Limiting Kolmogorov distribution
    Asymp,
}

impl FromStr for KsMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "exact" => Ok(Self::Exact),
            "asymp" | "asymptotic" => Ok(Self::Asymp),
            other => Err(AppError::validation(format!(
                "Unknown p-value method '{}' (expected auto, exact or asymp)",
                other
            ))),
        }
    }
}

impl fmt::Display for KsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Exact => write!(f, "exact"),
            Self::Asymp => write!(f, "asymp"),
        }
    }
}

/// Method that actually produced a p-value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PValueMethod {
    Exact,
    Asymptotic,
}

impl fmt::Display for PValueMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Asymptotic => write!(f, "asymptotic"),
        }
    }
}

/// Outcome of a two-sample Kolmogorov-Smirnov test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsTestResult {
    /// Maximum absolute difference between the two empirical CDFs
    pub statistic: f64,
    /// Two-sided p-value under the null hypothesis
    pub p_value: f64,
    /// How the p-value was obtained
    pub method: PValueMethod,
    /// Size of the first sample
    pub n1: usize,
    /// Size of the second sample
    pub n2: usize,
}

impl KsTestResult {
    /// Decide the verdict at the given significance level
    pub fn verdict(&self, alpha: f64) -> Verdict {
        Verdict::from_p_value(self.p_value, alpha)
    }
}

/// Significance verdict at a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Significant,
    NotSignificant,
}

impl Verdict {
    /// `Significant` when p lies strictly below alpha
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Self::Significant
        } else {
            Self::NotSignificant
        }
    }

    /// Sentence printed under the test results
    pub fn message(&self) -> &'static str {
        match self {
            Self::Significant => "statistically significant difference (distributions differ).",
            Self::NotSignificant => "No significant difference between distributions detected.",
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Self::Significant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("auto".parse::<KsMethod>().unwrap(), KsMethod::Auto);
        assert_eq!("EXACT".parse::<KsMethod>().unwrap(), KsMethod::Exact);
        assert_eq!("asymptotic".parse::<KsMethod>().unwrap(), KsMethod::Asymp);
        assert_eq!(" asymp ".parse::<KsMethod>().unwrap(), KsMethod::Asymp);

        let err = "permutation".parse::<KsMethod>().unwrap_err();
        assert_eq!(err.category(), "VALIDATION");
    }

    #[test]
    fn test_verdict_threshold_is_strict() {
        assert_eq!(Verdict::from_p_value(0.049, 0.05), Verdict::Significant);
        assert_eq!(Verdict::from_p_value(0.05, 0.05), Verdict::NotSignificant);
        assert_eq!(Verdict::from_p_value(1.0, 0.05), Verdict::NotSignificant);
        assert!(Verdict::from_p_value(1e-12, 0.05).is_significant());
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::Significant.message(),
            "statistically significant difference (distributions differ)."
        );
        assert_eq!(
            Verdict::NotSignificant.message(),
            "No significant difference between distributions detected."
        );
    }

    #[test]
    fn test_serialization_names() {
        let result = KsTestResult {
            statistic: 0.5,
            p_value: 0.01,
            method: PValueMethod::Exact,
            n1: 10,
            n2: 12,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"method\":\"exact\""));
        assert_eq!(serde_json::to_string(&Verdict::NotSignificant).unwrap(), "\"not_significant\"");
        assert_eq!(serde_json::to_string(&KsMethod::Asymp).unwrap(), "\"asymp\"");
    }
}
