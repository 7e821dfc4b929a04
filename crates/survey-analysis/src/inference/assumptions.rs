//! Assumption checks: Shapiro–Wilk normality and Brown–Forsythe variance
//! homogeneity.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal};
use survey_core::constants::SHAPIRO_MAX_N;
use survey_core::rounding::{round3, round_p};

use super::types::{CheckStatus, NormalityCheck, VarianceCheck};
use crate::math;

/// Upper-tail p-value of an F statistic. Invalid input yields 1.
pub fn f_upper_p(f: f64, df1: f64, df2: f64) -> f64 {
    if !f.is_finite() || f < 0.0 || !(df1 > 0.0) || !(df2 > 0.0) {
        return 1.0;
    }
    match FisherSnedecor::new(df1, df2) {
        Ok(dist) => dist.sf(f).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

fn std_normal() -> Option<Normal> {
    Normal::new(0.0, 1.0).ok()
}

fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Shapiro–Wilk W and p-value (Royston's approximation).
///
/// `None` when the test is not run: n < 3, n ≥ 5000, or all values equal
/// (the latter reported as p = 1 by the caller).
pub fn shapiro_wilk(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len();
    if !(3..SHAPIRO_MAX_N).contains(&n) {
        return None;
    }
    let x = math::sorted(values);
    let range = x[n - 1] - x[0];
    if range <= f64::EPSILON * x[n - 1].abs().max(1.0) {
        return Some((1.0, 1.0));
    }
    let normal = std_normal()?;
    let half = n / 2;
    let nf = n as f64;

    // Upper-half coefficients a[0..half], largest first.
    let mut a = vec![0.0; half];
    if n == 3 {
        a[0] = 0.5f64.sqrt();
    } else {
        let m: Vec<f64> = (1..=half)
            .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
            .collect();
        let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
        let ssumm2 = summ2.sqrt();
        let u = 1.0 / nf.sqrt();
        let a1 = poly(&[0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056], u)
            - m[0] / ssumm2;
        let (first, fac) = if n > 5 {
            let a2 = poly(&[0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633], u)
                - m[1] / ssumm2;
            let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
                / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
                .sqrt();
            a[1] = a2;
            (2, fac)
        } else {
            let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
            (1, fac)
        };
        a[0] = a1;
        for i in first..half {
            a[i] = -m[i] / fac;
        }
    }

    let mean = math::mean(&x);
    let ssq: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let numerator: f64 = (0..half).map(|i| a[i] * (x[n - 1 - i] - x[i])).sum();
    let w = (numerator * numerator / ssq).clamp(0.0, 1.0);

    let p = if n == 3 {
        let pi6 = 6.0 / std::f64::consts::PI;
        let stqr = std::f64::consts::FRAC_PI_3;
        (pi6 * (w.sqrt().asin() - stqr)).max(0.0)
    } else {
        let w1 = 1.0 - w;
        if w1 <= 0.0 {
            1.0
        } else {
            let y = w1.ln();
            let (z_input, mu, sigma) = if n <= 11 {
                let gamma = poly(&[-2.273, 0.459], nf);
                if y >= gamma {
                    return Some((w, 0.0));
                }
                (
                    -(gamma - y).ln(),
                    poly(&[0.5440, -0.39978, 0.025054, -0.0006714], nf),
                    poly(&[1.3822, -0.77857, 0.062767, -0.0020322], nf).exp(),
                )
            } else {
                let ln_n = nf.ln();
                (
                    y,
                    poly(&[-1.5861, -0.31082, -0.083751, 0.0038915], ln_n),
                    poly(&[-0.4803, -0.082676, 0.0030302], ln_n).exp(),
                )
            };
            normal.sf((z_input - mu) / sigma)
        }
    };
    Some((w, math_clamp_p(p)))
}

fn math_clamp_p(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Advisory normality check for one group.
pub fn normality_check(label: &str, values: &[f64], alpha: f64) -> NormalityCheck {
    match shapiro_wilk(values) {
        Some((w, p)) => NormalityCheck {
            group: label.to_string(),
            status: if p > alpha { CheckStatus::Pass } else { CheckStatus::Fail },
            w_statistic: Some(round3(w)),
            p_value: Some(round_p(p)),
        },
        None => NormalityCheck {
            group: label.to_string(),
            status: CheckStatus::NotTested,
            w_statistic: None,
            p_value: None,
        },
    }
}

/// Brown–Forsythe test: one-way ANOVA on absolute deviations from each
/// group's median. Zero within-group spread counts as equal variances.
pub fn brown_forsythe(groups: &[&[f64]], alpha: f64) -> VarianceCheck {
    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|g| {
            let med = math::median(g);
            g.iter().map(|v| (v - med).abs()).collect()
        })
        .collect();

    let k = deviations.len();
    let total: usize = deviations.iter().map(Vec::len).sum();
    let equal = VarianceCheck {
        statistic: 0.0,
        p_value: 1.0,
        equal_variances: true,
    };
    if k < 2 || total <= k {
        return equal;
    }

    let all: Vec<f64> = deviations.iter().flatten().copied().collect();
    let grand = math::mean(&all);
    let ss_between: f64 = deviations
        .iter()
        .map(|d| d.len() as f64 * (math::mean(d) - grand).powi(2))
        .sum();
    let ss_within: f64 = deviations.iter().map(|d| math::sum_of_squares(d)).sum();
    if ss_within <= 0.0 {
        tracing::debug!("zero within-group spread; treating variances as equal");
        return equal;
    }

    let df1 = (k - 1) as f64;
    let df2 = (total - k) as f64;
    let f = (ss_between / df1) / (ss_within / df2);
    let p = f_upper_p(f, df1, df2);
    VarianceCheck {
        statistic: round3(f),
        p_value: round_p(p),
        equal_variances: p > alpha,
    }
}
