//! Group-comparison hypothesis tests: two-sample t-test, chi-square
//! independence, and one-way ANOVA with Tukey HSD.

pub mod anova;
pub mod assumptions;
pub mod chi_square;
pub mod effect;
pub mod tukey;
pub mod two_sample;
pub mod types;

pub use anova::{one_way_anova, one_way_anova_with_alpha};
pub use chi_square::{independence_test, independence_test_with_alpha};
pub use effect::EffectMagnitude;
pub use two_sample::{two_sample_test, two_sample_test_with_alpha};
pub use types::*;
