//! Error code mapping and message tests.

use survey_core::errors::{AnalysisError, ConfigError, ServiceError, SurveyErrorCode};

#[test]
fn analysis_errors_have_stable_codes() {
    assert_eq!(
        AnalysisError::invalid("method", "unknown").error_code(),
        "INVALID_PARAMETER"
    );
    assert_eq!(AnalysisError::malformed("ragged").error_code(), "MALFORMED_TABLE");
    assert_eq!(
        AnalysisError::ShapeMismatch { expected: 3, actual: 2 }.error_code(),
        "SHAPE_MISMATCH"
    );
}

#[test]
fn service_error_forwards_inner_codes() {
    let err: ServiceError = AnalysisError::malformed("ragged").into();
    assert_eq!(err.error_code(), "MALFORMED_TABLE");

    let err: ServiceError = ConfigError::FileNotFound {
        path: "survey.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err = ServiceError::UnknownVariable {
        name: "height".into(),
        allowed: "age, hours_daily".into(),
    };
    assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
    assert!(err.to_string().contains("height"));
}

#[test]
fn messages_name_the_offending_parameter() {
    let err = AnalysisError::invalid("method", "\"kendall\" is not supported");
    assert_eq!(
        err.to_string(),
        "invalid parameter method: \"kendall\" is not supported"
    );
}
