//! Errors surfaced by the analysis service to its callers.

use super::error_code::{self, SurveyErrorCode};
use super::{AnalysisError, ConfigError};

/// Caller-visible rejections. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("unknown variable {name}; expected one of: {allowed}")]
    UnknownVariable { name: String, allowed: String },

    #[error("unsupported {parameter} {value:?}; expected one of: {allowed}")]
    UnsupportedParameter {
        parameter: String,
        value: String,
        allowed: String,
    },

    #[error("no question at column {column} for {cohort}")]
    UnknownQuestion { cohort: String, column: usize },

    #[error("analysis rejected: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to encode result: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl SurveyErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::UnsupportedParameter { .. } => error_code::INVALID_PARAMETER,
            Self::UnknownQuestion { .. } => error_code::UNKNOWN_QUESTION,
            Self::Analysis(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Encoding(_) => error_code::ENCODING_ERROR,
        }
    }
}
