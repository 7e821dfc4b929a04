//! Span definitions per engine operation.

/// Create a descriptive-summary span.
#[macro_export]
macro_rules! descriptive_span {
    ($kind:expr, $n:expr) => {
        tracing::debug_span!("survey.descriptive", kind = %$kind, n = $n)
    };
}

/// Create a hypothesis-test span.
#[macro_export]
macro_rules! inference_span {
    ($test:expr) => {
        tracing::debug_span!("survey.inference", test = %$test)
    };
}

/// Create a correlation span.
#[macro_export]
macro_rules! correlation_span {
    ($method:expr, $columns:expr) => {
        tracing::debug_span!("survey.correlation", method = %$method, columns = $columns)
    };
}

/// Create a regression span.
#[macro_export]
macro_rules! regression_span {
    ($predictors:expr, $rows:expr) => {
        tracing::debug_span!("survey.regression", predictors = $predictors, rows = $rows)
    };
}

/// Create a service request span.
#[macro_export]
macro_rules! service_span {
    ($operation:expr, $cohort:expr) => {
        tracing::info_span!("survey.service", operation = %$operation, cohort = %$cohort)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DESCRIPTIVE: &str = "survey.descriptive";
    pub const INFERENCE: &str = "survey.inference";
    pub const CORRELATION: &str = "survey.correlation";
    pub const REGRESSION: &str = "survey.regression";
    pub const SERVICE: &str = "survey.service";
}
