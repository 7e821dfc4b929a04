//! Statistical engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds and sizes used by the engines and the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Significance level. Default: 0.05.
    pub alpha: Option<f64>,
    /// Tukey fence multiplier. Default: 1.5.
    pub iqr_multiplier: Option<f64>,
    /// Numeric range above which values are binned. Default: 20.
    pub numeric_bin_threshold: Option<f64>,
    /// Number of equal-width bins for wide numeric ranges. Default: 10.
    pub numeric_bin_count: Option<usize>,
    /// Minimum observations per group before it enters an ANOVA. Default: 10.
    pub min_group_size: Option<usize>,
    /// Minimum complete rows for a regression. Default: 10.
    pub min_regression_rows: Option<usize>,
    /// Columns with this many valid values or fewer are dropped from
    /// correlation matrices. Default: 10.
    pub min_column_values: Option<usize>,
    /// Confidence level for mean intervals. Default: 0.95.
    pub confidence_level: Option<f64>,
}

impl AnalysisConfig {
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }

    pub fn effective_iqr_multiplier(&self) -> f64 {
        self.iqr_multiplier
            .unwrap_or(constants::DEFAULT_IQR_MULTIPLIER)
    }

    pub fn effective_numeric_bin_threshold(&self) -> f64 {
        self.numeric_bin_threshold
            .unwrap_or(constants::DEFAULT_NUMERIC_BIN_THRESHOLD)
    }

    pub fn effective_numeric_bin_count(&self) -> usize {
        self.numeric_bin_count
            .unwrap_or(constants::DEFAULT_NUMERIC_BIN_COUNT)
    }

    pub fn effective_min_group_size(&self) -> usize {
        self.min_group_size
            .unwrap_or(constants::DEFAULT_MIN_GROUP_SIZE)
    }

    pub fn effective_min_regression_rows(&self) -> usize {
        self.min_regression_rows
            .unwrap_or(constants::DEFAULT_MIN_REGRESSION_ROWS)
    }

    pub fn effective_min_column_values(&self) -> usize {
        self.min_column_values
            .unwrap_or(constants::DEFAULT_MIN_COLUMN_VALUES)
    }

    /// Returns the effective confidence level, defaulting to 0.95.
    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level.unwrap_or(0.95)
    }
}
