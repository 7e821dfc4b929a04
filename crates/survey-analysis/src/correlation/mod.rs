//! Pairwise correlation analysis.

pub mod matrix;
pub mod point_biserial;
pub mod types;

pub use matrix::correlation_matrix;
pub use point_biserial::{dichotomous_columns, point_biserial};
pub use types::*;
