//! Where the analyzer gets its records from.

use std::sync::Arc;

use crate::records::{StudentRecord, TeacherRecord};

/// Source of imported survey records. Implementations must be cheap to
/// call repeatedly; the analyzer asks once per uncached operation.
pub trait DataProvider: Send + Sync {
    fn students(&self) -> Arc<[StudentRecord]>;

    fn teachers(&self) -> Arc<[TeacherRecord]>;
}

/// Records held in memory, shared behind `Arc`s.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    students: Arc<[StudentRecord]>,
    teachers: Arc<[TeacherRecord]>,
}

impl InMemoryProvider {
    pub fn new(students: Vec<StudentRecord>, teachers: Vec<TeacherRecord>) -> Self {
        Self {
            students: students.into(),
            teachers: teachers.into(),
        }
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }
}

impl DataProvider for InMemoryProvider {
    fn students(&self) -> Arc<[StudentRecord]> {
        Arc::clone(&self.students)
    }

    fn teachers(&self) -> Arc<[TeacherRecord]> {
        Arc::clone(&self.teachers)
    }
}
