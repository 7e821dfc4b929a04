//! Regression result types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFit {
    Weak,
    Moderate,
    Good,
    Excellent,
}

impl ModelFit {
    pub fn from_r_squared(r2: f64) -> Self {
        if r2 > 0.7 {
            Self::Excellent
        } else if r2 > 0.5 {
            Self::Good
        } else if r2 > 0.3 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub n_observations: usize,
    pub n_features: usize,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    pub rmse: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub feature: String,
    pub coefficient: f64,
    /// Standardized beta.
    pub std_coefficient: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionInterpretation {
    pub variance_explained: String,
    pub model_fit: ModelFit,
    /// Up to three predictor names, largest |beta| first.
    pub top_predictors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub model_summary: ModelSummary,
    pub coefficients: Vec<Coefficient>,
    pub residuals: ResidualSummary,
    pub interpretation: RegressionInterpretation,
}
