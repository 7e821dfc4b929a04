//! Field registry: column position to field name, and field name to a typed
//! accessor, per cohort. Built once on first use.

pub mod encoders;
mod student;
mod teacher;

pub use encoders::{
    encode_currently_teaching, encode_gender, encode_school_level, encode_school_type,
    encode_subject_type, encode_yes_no, normalize_choice, normalize_school_level,
};
pub use student::STUDENT_CORRELATION_FIELDS;
pub use teacher::TEACHER_CORRELATION_FIELDS;

use rustc_hash::FxHashMap;
use survey_core::{Cohort, NamedColumn, RawValue};

/// Reads one field of a record.
pub type Accessor<R> = fn(&R) -> RawValue;

/// A named field and how to read it.
pub struct FieldSpec<R> {
    pub name: &'static str,
    pub accessor: Accessor<R>,
    /// Derived numeric code of a categorical answer.
    pub encoded: bool,
}

impl<R> FieldSpec<R> {
    pub fn plain(name: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            name,
            accessor,
            encoded: false,
        }
    }

    pub fn encoded(name: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            name,
            accessor,
            encoded: true,
        }
    }
}

/// Lookup tables for one cohort's record type.
pub struct FieldRegistry<R> {
    cohort: Cohort,
    columns: FxHashMap<usize, &'static str>,
    fields: Vec<FieldSpec<R>>,
    index: FxHashMap<&'static str, usize>,
}

impl<R> FieldRegistry<R> {
    pub fn new(
        cohort: Cohort,
        columns: &[(usize, &'static str)],
        fields: Vec<FieldSpec<R>>,
    ) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.name, i))
            .collect();
        Self {
            cohort,
            columns: columns.iter().copied().collect(),
            fields,
            index,
        }
    }

    pub fn cohort(&self) -> Cohort {
        self.cohort
    }

    /// Field stored for a questionnaire column, if the column is mapped.
    pub fn field_for_column(&self, column: usize) -> Option<&'static str> {
        self.columns.get(&column).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    pub fn is_encoded(&self, field: &str) -> bool {
        self.spec(field).is_some_and(|s| s.encoded)
    }

    /// Field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|s| s.name)
    }

    fn spec(&self, field: &str) -> Option<&FieldSpec<R>> {
        self.index.get(field).map(|&i| &self.fields[i])
    }

    /// Read `field` from one record. `None` for unknown fields.
    pub fn value(&self, record: &R, field: &str) -> Option<RawValue> {
        self.spec(field).map(|spec| (spec.accessor)(record))
    }

    /// Read `field` from every record, in order.
    pub fn values<'a>(
        &self,
        records: impl IntoIterator<Item = &'a R>,
        field: &str,
    ) -> Option<Vec<RawValue>>
    where
        R: 'a,
    {
        let spec = self.spec(field)?;
        Some(records.into_iter().map(spec.accessor).collect())
    }

    /// Numeric view of `field` across records, named after the field.
    pub fn numeric_column<'a>(
        &self,
        records: impl IntoIterator<Item = &'a R>,
        field: &str,
    ) -> Option<NamedColumn>
    where
        R: 'a,
    {
        let values = self.values(records, field)?;
        Some(NamedColumn::new(
            field,
            values.iter().map(RawValue::as_number).collect(),
        ))
    }
}

/// A record type with a registry.
pub trait SurveyRecord: Sized + Send + Sync + 'static {
    const COHORT: Cohort;

    fn registry() -> &'static FieldRegistry<Self>;
}

/// Declare a plain field read straight off the record.
macro_rules! record_field {
    ($record:ty; $name:literal => $field:ident) => {
        $crate::fields::FieldSpec::<$record>::plain($name, |r: &$record| {
            survey_core::RawValue::from(r.$field.clone())
        })
    };
}

pub(crate) use record_field;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{StudentRecord, TeacherRecord, ACTIVE_TEACHER_STATUS};

    #[test]
    fn student_columns_map_to_fields() {
        let registry = StudentRecord::registry();
        assert_eq!(registry.cohort(), Cohort::Student);
        assert_eq!(registry.field_for_column(7), Some("practical_competence"));
        assert_eq!(registry.field_for_column(16), Some("hours_daily"));
        assert_eq!(registry.field_for_column(19), Some("hours_daily"));
        assert_eq!(registry.field_for_column(17), None);
        assert_eq!(registry.field_for_column(25), Some("not_use_for"));
    }

    #[test]
    fn teacher_columns_map_to_fields() {
        let registry = TeacherRecord::registry();
        assert_eq!(registry.field_for_column(2), Some("currently_teaching"));
        assert_eq!(registry.field_for_column(6), Some("school_level"));
        assert_eq!(registry.field_for_column(21), None);
        assert_eq!(registry.field_for_column(26), Some("ai_purposes"));
    }

    #[test]
    fn accessors_read_and_encode() {
        let student = StudentRecord {
            age: Some(17),
            gender: Some("Femmina".to_string()),
            uses_ai_daily: Some("Sì".to_string()),
            practical_competence: Some(5.0),
            ..Default::default()
        };
        let registry = StudentRecord::registry();
        assert_eq!(registry.value(&student, "age"), Some(RawValue::Number(17.0)));
        assert_eq!(registry.value(&student, "gender_code"), Some(RawValue::Number(2.0)));
        assert_eq!(registry.value(&student, "uses_ai_study_code"), Some(RawValue::Missing));
        assert_eq!(registry.value(&student, "nope"), None);
        assert!(registry.is_encoded("school_type_code"));
        assert!(!registry.is_encoded("age"));

        let column = registry
            .numeric_column([&student, &StudentRecord::default()], "practical_competence")
            .unwrap();
        assert_eq!(column.values, vec![Some(5.0), None]);
    }

    #[test]
    fn teacher_binary_codes() {
        let teacher = TeacherRecord {
            currently_teaching: Some(ACTIVE_TEACHER_STATUS.to_string()),
            subject_type: Some("Umanistica".to_string()),
            ..Default::default()
        };
        let registry = TeacherRecord::registry();
        assert_eq!(
            registry.value(&teacher, "currently_teaching_binary"),
            Some(RawValue::Number(1.0))
        );
        assert_eq!(registry.value(&teacher, "subject_type_stem"), Some(RawValue::Number(0.0)));
    }
}
