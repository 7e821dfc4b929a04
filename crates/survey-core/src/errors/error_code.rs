//! Stable error codes surfaced to presentation layers.

pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const MALFORMED_TABLE: &str = "MALFORMED_TABLE";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_QUESTION: &str = "UNKNOWN_QUESTION";
pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const ENCODING_ERROR: &str = "ENCODING_ERROR";

/// Maps an error to its stable code.
pub trait SurveyErrorCode {
    fn error_code(&self) -> &'static str;
}
