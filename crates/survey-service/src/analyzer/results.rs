//! Payloads returned by [`super::SurveyAnalyzer`].

use serde::{Deserialize, Serialize};
use survey_analysis::correlation::CorrelationMatrixResult;
use survey_analysis::descriptive::{MeanInterval, QuestionSummary};
use survey_analysis::inference::{IndependenceTest, OneWayAnova, TwoSampleTest};
use survey_analysis::regression::RegressionResult;
use survey_core::{Analysis, Cohort, QuestionDescriptor};

use crate::records::TeacherFilter;

/// Descriptor and summary of one questionnaire column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub question: QuestionDescriptor,
    /// Stored field behind the column; `None` for unmapped columns.
    pub field: Option<String>,
    pub teacher_filter: Option<TeacherFilter>,
    pub summary: QuestionSummary,
}

/// Students vs in-service teachers on one variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortComparison {
    pub variable: String,
    pub variable_description: String,
    pub result: Analysis<TwoSampleTest>,
}

/// Cohort × daily AI use contingency analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageIndependence {
    pub variable: String,
    pub description: String,
    pub result: Analysis<IndependenceTest>,
}

/// Competence compared across school types or levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolComparison {
    pub variable: String,
    pub variable_description: String,
    pub grouping_variable: String,
    pub respondent_type: Cohort,
    /// Groups left out for having fewer observations than the minimum.
    pub excluded_groups: Vec<String>,
    pub result: Analysis<OneWayAnova>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortCorrelation {
    pub respondent_type: Cohort,
    pub teacher_filter: Option<TeacherFilter>,
    pub subject_type: Option<String>,
    /// Records considered before per-pair deletion.
    pub n_total: usize,
    /// Encoded columns with at most two distinct values.
    pub dichotomous_variables: Vec<String>,
    /// Columns dropped for having too few valid values.
    pub excluded_variables: Vec<String>,
    pub result: CorrelationMatrixResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetenceRegression {
    pub dependent_variable: String,
    pub respondent_type: Cohort,
    pub result: Analysis<RegressionResult>,
}

/// Mean and confidence interval of one variable for both cohorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableComparison {
    pub variable: String,
    pub label: String,
    pub students: MeanInterval,
    pub teachers: MeanInterval,
    /// Student mean minus teacher mean.
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalComparison {
    pub teacher_filter: TeacherFilter,
    pub comparisons: Vec<VariableComparison>,
    pub note: String,
}
