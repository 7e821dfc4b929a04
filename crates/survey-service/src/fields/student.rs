use std::sync::LazyLock;

use survey_core::Cohort;

use super::encoders::{encode_gender, encode_optional, encode_school_type, encode_yes_no};
use super::{record_field, FieldRegistry, FieldSpec, SurveyRecord};
use crate::records::StudentRecord;

const STUDENT_COLUMNS: &[(usize, &str)] = &[
    (2, "age"),
    (3, "gender"),
    (4, "school_type"),
    (5, "education_level"),
    (6, "study_path"),
    (7, "practical_competence"),
    (8, "theoretical_competence"),
    (9, "ai_change_study"),
    (10, "training_adequacy"),
    (11, "trust_integration"),
    (12, "teacher_preparation"),
    (13, "concern_ai_school"),
    (14, "concern_ai_peers"),
    (15, "uses_ai_daily"),
    (16, "hours_daily"),
    (18, "uses_ai_study"),
    // Weekly hours for daily activities share the daily-hours field.
    (19, "hours_daily"),
    (20, "hours_study"),
    (21, "hours_learning_tools"),
    (22, "hours_saved"),
    (23, "ai_tools"),
    (24, "ai_purposes"),
    (25, "not_use_for"),
];

static STUDENT_REGISTRY: LazyLock<FieldRegistry<StudentRecord>> = LazyLock::new(|| {
    let fields = vec![
        FieldSpec::plain("age", |r: &StudentRecord| r.age.map(f64::from).into()),
        record_field!(StudentRecord; "gender" => gender),
        record_field!(StudentRecord; "school_type" => school_type),
        record_field!(StudentRecord; "education_level" => education_level),
        record_field!(StudentRecord; "study_path" => study_path),
        record_field!(StudentRecord; "practical_competence" => practical_competence),
        record_field!(StudentRecord; "theoretical_competence" => theoretical_competence),
        record_field!(StudentRecord; "ai_change_study" => ai_change_study),
        record_field!(StudentRecord; "training_adequacy" => training_adequacy),
        record_field!(StudentRecord; "trust_integration" => trust_integration),
        record_field!(StudentRecord; "teacher_preparation" => teacher_preparation),
        record_field!(StudentRecord; "concern_ai_school" => concern_ai_school),
        record_field!(StudentRecord; "concern_ai_peers" => concern_ai_peers),
        record_field!(StudentRecord; "uses_ai_daily" => uses_ai_daily),
        record_field!(StudentRecord; "hours_daily" => hours_daily),
        record_field!(StudentRecord; "uses_ai_study" => uses_ai_study),
        record_field!(StudentRecord; "hours_study" => hours_study),
        record_field!(StudentRecord; "hours_learning_tools" => hours_learning_tools),
        record_field!(StudentRecord; "hours_saved" => hours_saved),
        record_field!(StudentRecord; "ai_tools" => ai_tools),
        record_field!(StudentRecord; "ai_purposes" => ai_purposes),
        record_field!(StudentRecord; "not_use_for" => not_use_for),
        record_field!(StudentRecord; "preferred_tools" => preferred_tools),
        FieldSpec::encoded("gender_code", |r: &StudentRecord| {
            encode_optional(r.gender.as_deref(), encode_gender)
        }),
        FieldSpec::encoded("uses_ai_daily_code", |r: &StudentRecord| {
            encode_optional(r.uses_ai_daily.as_deref(), encode_yes_no)
        }),
        FieldSpec::encoded("uses_ai_study_code", |r: &StudentRecord| {
            encode_optional(r.uses_ai_study.as_deref(), encode_yes_no)
        }),
        FieldSpec::encoded("school_type_code", |r: &StudentRecord| {
            encode_optional(r.school_type.as_deref(), encode_school_type)
        }),
    ];
    FieldRegistry::new(Cohort::Student, STUDENT_COLUMNS, fields)
});

impl SurveyRecord for StudentRecord {
    const COHORT: Cohort = Cohort::Student;

    fn registry() -> &'static FieldRegistry<Self> {
        &STUDENT_REGISTRY
    }
}

/// Columns correlated for students, in report order.
pub const STUDENT_CORRELATION_FIELDS: &[&str] = &[
    "practical_competence",
    "theoretical_competence",
    "ai_change_study",
    "training_adequacy",
    "trust_integration",
    "concern_ai_school",
    "concern_ai_peers",
    "age",
    "hours_daily",
    "hours_study",
    "gender_code",
    "uses_ai_daily_code",
    "uses_ai_study_code",
    "school_type_code",
];
