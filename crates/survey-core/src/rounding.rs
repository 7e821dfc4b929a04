//! Fixed-precision output conventions.
//!
//! Descriptive figures: 2 dp. Standard errors and test statistics: 3 dp.
//! Regression coefficients: 4 dp. p-values: 5 dp, except p < 0.00001,
//! which passes through unrounded so strict threshold ordering survives.

use crate::constants::P_VALUE_PASSTHROUGH;

/// Round `value` to `places` decimal places. Non-finite input yields 0.0.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // Avoid serializing "-0.0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to 2 decimal places (descriptive figures).
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 3 decimal places (standard errors, statistics, effect sizes).
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Round to 4 decimal places (regression coefficients, adjusted p-values).
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Round a p-value: 5 dp unless it is below the pass-through floor.
///
/// Non-finite p-values map to 1.0.
pub fn round_p(p: f64) -> f64 {
    if !p.is_finite() {
        return 1.0;
    }
    let p = p.clamp(0.0, 1.0);
    if p < P_VALUE_PASSTHROUGH {
        p
    } else {
        round_to(p, 5)
    }
}

/// Replace a non-finite value with `default`.
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// Format a p-value for plain-language conclusions.
pub fn describe_p(p: f64) -> String {
    if p < 0.001 {
        "p<0.001".to_string()
    } else {
        format!("p={:.3}", p)
    }
}
