//! Hypothesis test result types.

use serde::{Deserialize, Serialize};

use super::effect::EffectMagnitude;

/// Descriptive block reported for each compared group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub label: String,
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TTestVariant {
    /// Pooled-variance Student's t.
    Student,
    /// Unequal-variance Welch's t.
    Welch,
}

impl TTestVariant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student's t-test",
            Self::Welch => "Welch's t-test",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Fail,
    NotTested,
}

/// Shapiro–Wilk result for one group. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalityCheck {
    pub group: String,
    pub status: CheckStatus,
    pub w_statistic: Option<f64>,
    pub p_value: Option<f64>,
}

/// Brown–Forsythe (median-centred Levene) result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceCheck {
    pub statistic: f64,
    pub p_value: f64,
    pub equal_variances: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub normality: Vec<NormalityCheck>,
    pub equal_variances: VarianceCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleStatistics {
    pub t_statistic: f64,
    /// n1 + n2 − 2 for the pooled variant, Welch–Satterthwaite otherwise.
    pub df: f64,
    pub p_value: f64,
    /// Mean of group 1 minus mean of group 2.
    pub mean_difference: f64,
    pub ci_95: Interval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSize {
    pub measure: String,
    pub value: f64,
    pub interpretation: EffectMagnitude,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    pub significant: bool,
    pub alpha: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleTest {
    pub test_type: TTestVariant,
    pub test_name: String,
    pub groups: Vec<GroupStats>,
    pub statistics: TwoSampleStatistics,
    pub effect_size: EffectSize,
    pub assumptions: Assumptions,
    pub conclusion: Conclusion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub observed: Vec<Vec<f64>>,
    pub expected: Vec<Vec<f64>>,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// Row percentages, 1 dp.
    pub percentages: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndependenceStatistics {
    pub chi_square: f64,
    pub df: usize,
    pub p_value: f64,
    pub n: f64,
    pub yates_corrected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndependenceTest {
    pub test_name: String,
    pub contingency_table: ContingencyTable,
    pub statistics: IndependenceStatistics,
    pub effect_size: EffectSize,
    pub conclusion: Conclusion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnovaStatistics {
    pub f_statistic: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub p_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub group1: String,
    pub group2: String,
    pub mean_diff: f64,
    pub p_adjusted: f64,
    pub significant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostHoc {
    pub method: String,
    pub pairwise_comparisons: Vec<PairwiseComparison>,
    /// `"A vs B"` for each significant pair.
    pub significant_pairs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneWayAnova {
    pub test_name: String,
    pub groups: Vec<GroupStats>,
    pub statistics: AnovaStatistics,
    pub effect_size: EffectSize,
    pub posthoc: Option<PostHoc>,
    pub conclusion: Conclusion,
}
