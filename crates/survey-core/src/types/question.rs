//! Question identity and classification tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// The respondent cohort a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    Student,
    Teacher,
}

impl Cohort {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cohort {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" | "students" => Ok(Self::Student),
            "teacher" | "teachers" => Ok(Self::Teacher),
            other => Err(AnalysisError::invalid(
                "respondent_type",
                format!("{other:?} is not one of student, teacher"),
            )),
        }
    }
}

/// How a question's answers are shaped, and therefore which summary applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKind {
    #[serde(rename = "scale_1_7")]
    Scale1To7,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "yes_no")]
    YesNo,
    #[serde(rename = "single_choice")]
    SingleChoice,
    #[serde(rename = "multi_choice")]
    MultiChoice,
    #[serde(rename = "text")]
    Text,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 6] = [
        Self::Scale1To7,
        Self::Numeric,
        Self::YesNo,
        Self::SingleChoice,
        Self::MultiChoice,
        Self::Text,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scale1To7 => "scale_1_7",
            Self::Numeric => "numeric",
            Self::YesNo => "yes_no",
            Self::SingleChoice => "single_choice",
            Self::MultiChoice => "multi_choice",
            Self::Text => "text",
        }
    }

    /// Whether any statistic is computed for this kind.
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResponseKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scale_1_7" | "scale" => Ok(Self::Scale1To7),
            "numeric" => Ok(Self::Numeric),
            "yes_no" => Ok(Self::YesNo),
            "single_choice" => Ok(Self::SingleChoice),
            "multi_choice" | "multiple_choice" => Ok(Self::MultiChoice),
            "text" => Ok(Self::Text),
            other => Err(AnalysisError::invalid(
                "response_kind",
                format!("unknown response kind {other:?}"),
            )),
        }
    }
}

/// Open-ended versus closed-ended phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Open,
    Closed,
}

/// Thematic grouping used by dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Demographic,
    Competence,
    Trust,
    Concern,
    Training,
    Usage,
    Tools,
    Personalization,
    Impact,
    Challenges,
    OpenReflection,
    Other,
}

impl QuestionCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Demographic => "demographic",
            Self::Competence => "competence",
            Self::Trust => "trust",
            Self::Concern => "concern",
            Self::Training => "training",
            Self::Usage => "usage",
            Self::Tools => "tools",
            Self::Personalization => "personalization",
            Self::Impact => "impact",
            Self::Challenges => "challenges",
            Self::OpenReflection => "open_reflection",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive bounds of a rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: i64,
    pub max: i64,
}

impl ScaleBounds {
    pub fn likert7() -> Self {
        Self {
            min: crate::constants::SCALE_MIN,
            max: crate::constants::SCALE_MAX,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }
}

/// A classified question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    pub cohort: Cohort,
    pub column: usize,
    pub question_text: String,
    pub question_type: QuestionType,
    pub category: QuestionCategory,
    pub kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleBounds>,
}
