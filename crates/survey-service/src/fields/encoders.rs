//! Categorical encoders used to turn answers into correlatable codes.
//!
//! Unknown labels encode to 0, matching how they were coded at import.

use survey_core::RawValue;

use crate::records::ACTIVE_TEACHER_STATUS;

/// Maschio 1, Femmina 2, Altro 3, Preferisco non rispondere 4.
pub fn encode_gender(gender: &str) -> i64 {
    match gender.trim() {
        "Maschio" => 1,
        "Femmina" => 2,
        "Altro" => 3,
        "Preferisco non rispondere" => 4,
        _ => 0,
    }
}

/// 1 for "Sì", 0 otherwise.
pub fn encode_yes_no(value: &str) -> i64 {
    i64::from(value.trim() == "Sì")
}

pub fn encode_school_type(school_type: &str) -> i64 {
    match school_type.trim() {
        "Liceo" => 1,
        "Istituto Tecnico" => 2,
        "Istituto Professionale" => 3,
        "Altro" => 4,
        _ => 0,
    }
}

/// Teacher school level. Normalised labels encode like their long forms.
pub fn encode_school_level(school_level: &str) -> i64 {
    match school_level.trim() {
        "Scuola Primaria" => 1,
        "Scuola Secondaria di Primo Grado" | "Scuola Secondaria di I Grado" => 2,
        "Scuola Secondaria di Secondo Grado" | "Scuola Secondaria di II Grado" => 3,
        "Università" => 4,
        "Altro" => 5,
        _ => 0,
    }
}

/// 1 for teachers in service, 0 otherwise.
pub fn encode_currently_teaching(value: &str) -> i64 {
    i64::from(value.trim() == ACTIVE_TEACHER_STATUS)
}

/// 1 for STEM subjects, 0 for the humanities.
pub fn encode_subject_type(subject_type: &str) -> i64 {
    i64::from(subject_type.contains("STEM"))
}

/// Merge the spelling variants of a school level into one label.
///
/// The second-grade check runs first: "ii grado" contains "i grado".
pub fn normalize_school_level(level: &str) -> String {
    let trimmed = level.trim();
    let lower = trimmed.to_lowercase();
    let secondary = lower.contains("secondaria");

    if lower.contains("infanzia") {
        "Scuola dell'Infanzia".to_string()
    } else if lower.contains("primaria") {
        "Scuola Primaria".to_string()
    } else if secondary
        && ["ii grado", "secondo grado", "superiori"]
            .iter()
            .any(|k| lower.contains(k))
    {
        "Scuola Secondaria di II Grado".to_string()
    } else if secondary
        && ["i grado", "primo grado", "medie"]
            .iter()
            .any(|k| lower.contains(k))
    {
        "Scuola Secondaria di I Grado".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Apply field-specific normalisation to a categorical answer.
pub fn normalize_choice(field: &str, value: RawValue) -> RawValue {
    match (field, &value) {
        ("school_level", RawValue::Text(text)) => RawValue::Text(normalize_school_level(text)),
        _ => value,
    }
}

/// Encode an optional answer, keeping missing and blank answers missing.
pub(crate) fn encode_optional(value: Option<&str>, encoder: fn(&str) -> i64) -> RawValue {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => RawValue::from(encoder(text)),
        _ => RawValue::Missing,
    }
}
