//! # survey-service
//!
//! The layer between stored survey records and the analysis engines.
//! Owns per-cohort record types, the field registry and categorical
//! encoders, the `DataProvider` seam, the result cache, and
//! [`SurveyAnalyzer`], which validates caller parameters and runs the
//! engines.

pub mod analyzer;
pub mod cache;
pub mod fields;
pub mod provider;
pub mod records;

pub use analyzer::SurveyAnalyzer;
pub use cache::ResultCache;
pub use fields::{FieldRegistry, SurveyRecord};
pub use provider::{DataProvider, InMemoryProvider};
pub use records::{StudentRecord, TeacherFilter, TeacherRecord};
