//! The "no result" outcome shared by every engine.

use serde::{Deserialize, Serialize};

/// Why an analysis could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    /// Human-readable explanation for the empty state.
    pub reason: String,
    /// Observations (or groups) the statistic needs.
    pub required: usize,
    /// Observations (or groups) actually available.
    pub available: usize,
}

/// Outcome of an engine call: a computed result, or a structured
/// insufficient-data payload the presentation layer renders as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis<T> {
    Complete(T),
    InsufficientData(InsufficientData),
}

impl<T> Analysis<T> {
    pub fn insufficient(reason: impl Into<String>, required: usize, available: usize) -> Self {
        Self::InsufficientData(InsufficientData {
            reason: reason.into(),
            required,
            available,
        })
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The computed result, if any.
    pub fn complete(self) -> Option<T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::InsufficientData(_) => None,
        }
    }

    pub fn as_complete(&self) -> Option<&T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::InsufficientData(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Analysis<U> {
        match self {
            Self::Complete(value) => Analysis::Complete(f(value)),
            Self::InsufficientData(info) => Analysis::InsufficientData(info),
        }
    }
}
