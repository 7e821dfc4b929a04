//! Correlation result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use survey_core::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
}

impl CorrelationMethod {
    pub const ALL: [CorrelationMethod; 2] = [Self::Pearson, Self::Spearman];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorrelationMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(Self::Pearson),
            "spearman" => Ok(Self::Spearman),
            other => Err(AnalysisError::invalid(
                "method",
                format!("unsupported correlation method {other:?}; expected pearson or spearman"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_r(r: f64) -> Self {
        let r = r.abs();
        if r >= 0.7 {
            Self::VeryStrong
        } else if r >= 0.5 {
            Self::Strong
        } else if r >= 0.3 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn from_r(r: f64) -> Self {
        if r > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// One significant off-diagonal pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub var1: String,
    pub var2: String,
    pub correlation: f64,
    pub p_value: f64,
    pub strength: Strength,
    pub direction: Direction,
    pub n_observations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    pub total_comparisons: usize,
    pub significant_count: usize,
    pub percentage_significant: f64,
    pub strongest_correlation: Option<CorrelationPair>,
}

/// Square coefficient matrix with a parallel p-value matrix, both indexed
/// by `variables`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrixResult {
    pub method: CorrelationMethod,
    pub variables: Vec<String>,
    pub correlation_matrix: Vec<Vec<f64>>,
    pub p_values: Vec<Vec<f64>>,
    pub significant_correlations: Vec<CorrelationPair>,
    pub interpretation: CorrelationSummary,
}

impl CorrelationMatrixResult {
    /// Coefficient for a pair of variables by name.
    pub fn coefficient(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.variables.iter().position(|v| v == a)?;
        let j = self.variables.iter().position(|v| v == b)?;
        Some(self.correlation_matrix[i][j])
    }
}

/// Point-biserial correlation between a continuous and a two-valued column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointBiserial {
    pub continuous: String,
    pub dichotomous: String,
    pub correlation: f64,
    pub p_value: f64,
    pub n_observations: usize,
}
