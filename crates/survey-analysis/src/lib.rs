//! # survey-analysis
//!
//! Pure, synchronous statistical engines over survey response vectors:
//! - `classifier`: question text to response kind, category, descriptor
//! - `descriptive`: kind-specific per-question summaries
//! - `inference`: two-sample t-test, chi-square independence, one-way ANOVA
//! - `correlation`: pairwise correlation matrix, point-biserial
//! - `regression`: OLS multiple regression
//!
//! Engines hold no shared state and never call each other.

pub mod classifier;
pub mod correlation;
pub mod descriptive;
pub mod inference;
pub mod math;
pub mod regression;

pub use classifier::ResponseClassifier;
pub use correlation::{correlation_matrix, CorrelationMatrixResult, CorrelationMethod};
pub use descriptive::{DescriptiveEngine, QuestionSummary};
pub use inference::{independence_test, one_way_anova, two_sample_test};
pub use regression::{multiple_regression, RegressionResult};
