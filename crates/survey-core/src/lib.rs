//! # survey-core
//!
//! Foundation crate for the survey statistics engine.
//! Defines the shared types, errors, config, tracing setup, and the
//! rounding conventions every result payload follows.

pub mod config;
pub mod constants;
pub mod errors;
pub mod rounding;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SurveyConfig;
pub use errors::{AnalysisError, AnalysisResult, ConfigError, ServiceError, SurveyErrorCode};
pub use types::{
    Analysis, Cohort, InsufficientData, NamedColumn, QuestionCategory, QuestionDescriptor,
    QuestionType, RawValue, ResponseKind, ScaleBounds,
};
