//! Engine-level rejections.
//!
//! Insufficient data is not an error here: it is reported through
//! [`crate::types::Analysis::InsufficientData`].

use super::error_code::{self, SurveyErrorCode};

/// Errors raised by the analysis engines before any computation begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("malformed contingency table: {reason}")]
    MalformedTable { reason: String },

    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl AnalysisError {
    /// Shorthand for an [`AnalysisError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`AnalysisError::MalformedTable`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }
}

impl SurveyErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::MalformedTable { .. } => error_code::MALFORMED_TABLE,
            Self::ShapeMismatch { .. } => error_code::SHAPE_MISMATCH,
        }
    }
}

/// Result alias for engine operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
