//! Shared data model: raw responses, question descriptors, and the
//! insufficient-data outcome every engine returns instead of failing.

pub mod outcome;
pub mod question;
pub mod response;

pub use outcome::{Analysis, InsufficientData};
pub use question::{
    Cohort, QuestionCategory, QuestionDescriptor, QuestionType, ResponseKind, ScaleBounds,
};
pub use response::{NamedColumn, RawValue};
