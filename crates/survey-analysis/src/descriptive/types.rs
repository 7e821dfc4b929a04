//! Result types for per-question summaries.

use serde::{Deserialize, Serialize};
use survey_core::ResponseKind;

/// Kind-specific summary of one question's responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "summary", rename_all = "snake_case")]
pub enum QuestionSummary {
    Scale(ScaleSummary),
    Numeric(NumericSummary),
    YesNo(YesNoSummary),
    SingleChoice(ChoiceSummary),
    MultiChoice(MultiChoiceSummary),
    /// Nothing left after cleaning. Terminal, not an error.
    NoData(EmptySummary),
    /// The kind carries no statistics (free text).
    NotApplicable(EmptySummary),
}

impl QuestionSummary {
    pub fn has_data(&self) -> bool {
        !matches!(self, Self::NoData(_) | Self::NotApplicable(_))
    }

    /// Number of observations the summary was computed from.
    pub fn response_count(&self) -> usize {
        match self {
            Self::Scale(s) => s.response_count,
            Self::Numeric(s) => s.response_count,
            Self::YesNo(s) => s.response_count,
            Self::SingleChoice(s) => s.response_count,
            Self::MultiChoice(s) => s.total_responses,
            Self::NoData(_) | Self::NotApplicable(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptySummary {
    pub kind: ResponseKind,
    pub has_data: bool,
    pub message: String,
}

impl EmptySummary {
    pub fn new(kind: ResponseKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            has_data: false,
            message: message.into(),
        }
    }
}

/// Tukey fences and the observations outside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outliers: Vec<f64>,
}

/// Box-plot geometry. Whiskers are the extreme observations inside the fences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Central tendency, dispersion and fences of a numeric vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Present only when some value repeats.
    pub mode: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub quartiles: QuartileSummary,
    pub boxplot: BoxPlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleBucket {
    pub value: i64,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSummary {
    pub has_data: bool,
    pub response_count: usize,
    /// Non-missing values outside the scale or not numeric.
    pub excluded: usize,
    pub statistics: NumericStatistics,
    pub distribution: Vec<ScaleBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinCount {
    /// `"{start}-{end}"` with both ends truncated to integers.
    pub range: String,
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "buckets", rename_all = "snake_case")]
pub enum NumericDistribution {
    Discrete(Vec<ValueCount>),
    Binned(Vec<BinCount>),
}

impl NumericDistribution {
    pub fn total(&self) -> usize {
        match self {
            Self::Discrete(v) => v.iter().map(|b| b.count).sum(),
            Self::Binned(v) => v.iter().map(|b| b.count).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub has_data: bool,
    pub response_count: usize,
    /// Non-missing values that were non-positive or not numeric.
    pub excluded: usize,
    pub statistics: NumericStatistics,
    pub distribution: NumericDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCount {
    pub answer: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YesNoSummary {
    pub has_data: bool,
    pub response_count: usize,
    pub total_yes: usize,
    pub total_no: usize,
    pub yes_percentage: f64,
    pub no_percentage: f64,
    pub distribution: Vec<AnswerCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSummary {
    pub has_data: bool,
    pub response_count: usize,
    pub unique_answers: usize,
    pub distribution: Vec<AnswerCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
    /// Share of respondents who picked the option.
    pub percentage: f64,
    /// Share of all selections.
    pub selection_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiChoiceSummary {
    pub has_data: bool,
    pub total_responses: usize,
    pub responses_with_selection: usize,
    pub total_selections: usize,
    pub unique_options: usize,
    pub avg_selections_per_response: f64,
    pub most_selected: Option<String>,
    pub most_selected_count: usize,
    pub distribution: Vec<OptionCount>,
}

/// Mean with a Student's t confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanInterval {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    pub se: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub median: f64,
    pub confidence_level: f64,
}
