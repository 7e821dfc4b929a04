//! Ordinary least squares multiple regression.

pub mod ols;
pub mod types;

pub use ols::{multiple_regression, multiple_regression_with_min_rows};
pub use types::*;
