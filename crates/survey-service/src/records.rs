//! Per-cohort survey records as stored after import.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use survey_core::AnalysisError;

/// `currently_teaching` answer of an in-service teacher.
pub const ACTIVE_TEACHER_STATUS: &str = "Attualmente insegno.";

/// `currently_teaching` answer of a teacher still in initial training.
pub const TRAINING_TEACHER_STATUS: &str = "Ancora non insegno, ma sto seguendo o ho concluso un percorso PEF (Percorso di formazione iniziale degli insegnanti).";

/// One student questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRecord {
    pub code: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub school_type: Option<String>,
    pub education_level: Option<String>,
    pub study_path: Option<String>,

    pub practical_competence: Option<f64>,
    pub theoretical_competence: Option<f64>,
    pub ai_change_study: Option<f64>,
    pub training_adequacy: Option<f64>,
    pub trust_integration: Option<f64>,
    pub teacher_preparation: Option<f64>,
    pub concern_ai_school: Option<f64>,
    pub concern_ai_peers: Option<f64>,

    pub uses_ai_daily: Option<String>,
    pub hours_daily: Option<f64>,
    pub uses_ai_study: Option<String>,
    pub hours_study: Option<f64>,
    pub hours_learning_tools: Option<f64>,
    pub hours_saved: Option<f64>,

    pub ai_tools: Option<String>,
    pub ai_purposes: Option<String>,
    pub not_use_for: Option<String>,
    pub preferred_tools: Option<String>,
}

/// One teacher questionnaire, in service or in training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherRecord {
    pub code: Option<String>,
    pub currently_teaching: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub education_level: Option<String>,
    pub school_level: Option<String>,
    pub subject_type: Option<String>,
    pub subject_area: Option<String>,

    pub practical_competence: Option<f64>,
    pub theoretical_competence: Option<f64>,
    pub ai_change_teaching: Option<f64>,
    pub ai_change_my_teaching: Option<f64>,
    pub training_adequacy: Option<f64>,
    pub trust_integration: Option<f64>,
    pub trust_students_responsible: Option<f64>,
    pub concern_ai_education: Option<f64>,
    pub concern_ai_students: Option<f64>,

    pub uses_ai_daily: Option<String>,
    pub hours_daily: Option<f64>,
    pub uses_ai_teaching: Option<String>,
    pub hours_training: Option<f64>,
    pub hours_lesson_planning: Option<f64>,

    pub ai_tools: Option<String>,
    pub ai_purposes: Option<String>,
    pub not_use_for: Option<String>,
    pub preferred_tools: Option<String>,
}

impl TeacherRecord {
    /// True for teachers currently in service.
    pub fn is_active(&self) -> bool {
        self.currently_teaching.as_deref() == Some(ACTIVE_TEACHER_STATUS)
    }
}

/// Which teachers an operation looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeacherFilter {
    /// Teachers currently in service.
    #[default]
    Active,
    /// Everyone not currently in service.
    Training,
    All,
}

impl TeacherFilter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Training => "training",
            Self::All => "all",
        }
    }

    pub fn accepts(&self, teacher: &TeacherRecord) -> bool {
        match self {
            Self::Active => teacher.is_active(),
            Self::Training => !teacher.is_active(),
            Self::All => true,
        }
    }

    pub fn apply<'a>(&self, teachers: &'a [TeacherRecord]) -> Vec<&'a TeacherRecord> {
        teachers.iter().filter(|t| self.accepts(t)).collect()
    }
}

impl fmt::Display for TeacherFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TeacherFilter {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "training" | "non_teaching" => Ok(Self::Training),
            "all" => Ok(Self::All),
            other => Err(AnalysisError::invalid(
                "teacher_filter",
                format!("unknown filter {other:?}; expected active, training or all"),
            )),
        }
    }
}
