use proptest::prelude::*;
use survey_core::RawValue;
use survey_service::fields::{
    encode_gender, encode_school_level, encode_school_type, encode_yes_no, normalize_choice,
    normalize_school_level,
};
use survey_service::records::{ACTIVE_TEACHER_STATUS, TRAINING_TEACHER_STATUS};
use survey_service::{TeacherFilter, TeacherRecord};

fn school_level_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Scuola secondaria di primo grado (medie)".to_string()),
        Just("Scuola Secondaria di II grado".to_string()),
        Just("scuola primaria".to_string()),
        Just("Scuola dell'infanzia".to_string()),
        Just("Università".to_string()),
        ".{0,60}",
    ]
}

fn teaching_status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some(ACTIVE_TEACHER_STATUS.to_string())),
        Just(Some(TRAINING_TEACHER_STATUS.to_string())),
        Just(None),
        ".{0,20}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn codes_stay_in_range(s in ".{0,40}") {
        prop_assert!((0..=4).contains(&encode_gender(&s)));
        prop_assert!((0..=4).contains(&encode_school_type(&s)));
        prop_assert!((0..=5).contains(&encode_school_level(&s)));
        prop_assert!((0..=1).contains(&encode_yes_no(&s)));
    }

    #[test]
    fn school_level_normalization_is_idempotent(level in school_level_text()) {
        let once = normalize_school_level(&level);
        let twice = normalize_school_level(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn only_school_level_is_normalized(s in ".{0,40}") {
        let value = RawValue::Text(s.clone());
        prop_assert_eq!(normalize_choice("school_type", value.clone()), value);
        prop_assert_eq!(
            normalize_choice("school_level", RawValue::Text(s.clone())),
            RawValue::Text(normalize_school_level(&s))
        );
    }

    #[test]
    fn teacher_filters_partition_records(
        statuses in prop::collection::vec(teaching_status(), 0..40)
    ) {
        let teachers: Vec<TeacherRecord> = statuses
            .into_iter()
            .map(|currently_teaching| TeacherRecord { currently_teaching, ..Default::default() })
            .collect();
        let active = TeacherFilter::Active.apply(&teachers).len();
        let training = TeacherFilter::Training.apply(&teachers).len();
        prop_assert_eq!(active + training, TeacherFilter::All.apply(&teachers).len());
        prop_assert_eq!(TeacherFilter::All.apply(&teachers).len(), teachers.len());
    }
}
