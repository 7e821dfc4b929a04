use std::sync::LazyLock;

use survey_core::Cohort;

use super::encoders::{
    encode_currently_teaching, encode_gender, encode_optional, encode_school_level,
    encode_subject_type, encode_yes_no,
};
use super::{record_field, FieldRegistry, FieldSpec, SurveyRecord};
use crate::records::TeacherRecord;

const TEACHER_COLUMNS: &[(usize, &str)] = &[
    (2, "currently_teaching"),
    (3, "age"),
    (4, "gender"),
    (5, "education_level"),
    (6, "school_level"),
    (7, "subject_type"),
    (8, "subject_area"),
    (9, "practical_competence"),
    (10, "theoretical_competence"),
    (11, "ai_change_teaching"),
    (12, "ai_change_my_teaching"),
    (13, "training_adequacy"),
    (14, "trust_integration"),
    (15, "trust_students_responsible"),
    (16, "concern_ai_education"),
    (17, "concern_ai_students"),
    (18, "not_use_for"),
    (19, "uses_ai_daily"),
    (20, "hours_daily"),
    (22, "uses_ai_teaching"),
    (23, "hours_training"),
    (24, "hours_lesson_planning"),
    (25, "ai_tools"),
    (26, "ai_purposes"),
];

static TEACHER_REGISTRY: LazyLock<FieldRegistry<TeacherRecord>> = LazyLock::new(|| {
    let fields = vec![
        record_field!(TeacherRecord; "currently_teaching" => currently_teaching),
        FieldSpec::plain("age", |r: &TeacherRecord| r.age.map(f64::from).into()),
        record_field!(TeacherRecord; "gender" => gender),
        record_field!(TeacherRecord; "education_level" => education_level),
        record_field!(TeacherRecord; "school_level" => school_level),
        record_field!(TeacherRecord; "subject_type" => subject_type),
        record_field!(TeacherRecord; "subject_area" => subject_area),
        record_field!(TeacherRecord; "practical_competence" => practical_competence),
        record_field!(TeacherRecord; "theoretical_competence" => theoretical_competence),
        record_field!(TeacherRecord; "ai_change_teaching" => ai_change_teaching),
        record_field!(TeacherRecord; "ai_change_my_teaching" => ai_change_my_teaching),
        record_field!(TeacherRecord; "training_adequacy" => training_adequacy),
        record_field!(TeacherRecord; "trust_integration" => trust_integration),
        record_field!(TeacherRecord; "trust_students_responsible" => trust_students_responsible),
        record_field!(TeacherRecord; "concern_ai_education" => concern_ai_education),
        record_field!(TeacherRecord; "concern_ai_students" => concern_ai_students),
        record_field!(TeacherRecord; "uses_ai_daily" => uses_ai_daily),
        record_field!(TeacherRecord; "hours_daily" => hours_daily),
        record_field!(TeacherRecord; "uses_ai_teaching" => uses_ai_teaching),
        record_field!(TeacherRecord; "hours_training" => hours_training),
        record_field!(TeacherRecord; "hours_lesson_planning" => hours_lesson_planning),
        record_field!(TeacherRecord; "ai_tools" => ai_tools),
        record_field!(TeacherRecord; "ai_purposes" => ai_purposes),
        record_field!(TeacherRecord; "not_use_for" => not_use_for),
        record_field!(TeacherRecord; "preferred_tools" => preferred_tools),
        FieldSpec::encoded("gender_code", |r: &TeacherRecord| {
            encode_optional(r.gender.as_deref(), encode_gender)
        }),
        FieldSpec::encoded("uses_ai_daily_code", |r: &TeacherRecord| {
            encode_optional(r.uses_ai_daily.as_deref(), encode_yes_no)
        }),
        FieldSpec::encoded("school_level_code", |r: &TeacherRecord| {
            encode_optional(r.school_level.as_deref(), encode_school_level)
        }),
        FieldSpec::encoded("currently_teaching_binary", |r: &TeacherRecord| {
            encode_optional(r.currently_teaching.as_deref(), encode_currently_teaching)
        }),
        FieldSpec::encoded("subject_type_stem", |r: &TeacherRecord| {
            encode_optional(r.subject_type.as_deref(), encode_subject_type)
        }),
    ];
    FieldRegistry::new(Cohort::Teacher, TEACHER_COLUMNS, fields)
});

impl SurveyRecord for TeacherRecord {
    const COHORT: Cohort = Cohort::Teacher;

    fn registry() -> &'static FieldRegistry<Self> {
        &TEACHER_REGISTRY
    }
}

/// Columns correlated for teachers, in report order.
pub const TEACHER_CORRELATION_FIELDS: &[&str] = &[
    "practical_competence",
    "theoretical_competence",
    "ai_change_teaching",
    "training_adequacy",
    "trust_integration",
    "concern_ai_education",
    "concern_ai_students",
    "age",
    "hours_daily",
    "hours_training",
    "hours_lesson_planning",
    "gender_code",
    "uses_ai_daily_code",
    "school_level_code",
    "currently_teaching_binary",
    "subject_type_stem",
];
