//! Two-sample t-test with assumption checks.

use survey_core::constants::{DEFAULT_ALPHA, Z_CRITICAL_95};
use survey_core::rounding::{describe_p, finite_or, round2, round3, round_p};
use survey_core::{inference_span, Analysis, AnalysisResult};

use super::assumptions::{brown_forsythe, normality_check};
use super::effect::EffectMagnitude;
use super::types::{
    Assumptions, Conclusion, EffectSize, GroupStats, Interval, TTestVariant, TwoSampleStatistics,
    TwoSampleTest,
};
use crate::math;

const MIN_GROUP_VALUES: usize = 2;

/// Compare the means of two groups at the conventional alpha.
pub fn two_sample_test(
    group1: &[f64],
    group2: &[f64],
    labels: (&str, &str),
) -> AnalysisResult<Analysis<TwoSampleTest>> {
    two_sample_test_with_alpha(group1, group2, labels, DEFAULT_ALPHA)
}

/// Compare the means of two groups.
///
/// The Brown–Forsythe check selects the variant: unequal variances run
/// Welch's test, otherwise the pooled-variance Student test. Normality is
/// reported but never changes the variant.
pub fn two_sample_test_with_alpha(
    group1: &[f64],
    group2: &[f64],
    labels: (&str, &str),
    alpha: f64,
) -> AnalysisResult<Analysis<TwoSampleTest>> {
    let _span = inference_span!("two_sample").entered();

    let a: Vec<f64> = group1.iter().copied().filter(|v| v.is_finite()).collect();
    let b: Vec<f64> = group2.iter().copied().filter(|v| v.is_finite()).collect();
    let available = a.len().min(b.len());
    if available < MIN_GROUP_VALUES {
        return Ok(Analysis::insufficient(
            "each group needs at least two values",
            MIN_GROUP_VALUES,
            available,
        ));
    }

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (mean1, mean2) = (math::mean(&a), math::mean(&b));
    let (var1, var2) = (math::sample_variance(&a), math::sample_variance(&b));
    let (sd1, sd2) = (var1.sqrt(), var2.sqrt());

    let normality = vec![
        normality_check(labels.0, &a, alpha),
        normality_check(labels.1, &b, alpha),
    ];
    let variance = brown_forsythe(&[&a, &b], alpha);
    let variant = if variance.equal_variances {
        TTestVariant::Student
    } else {
        TTestVariant::Welch
    };

    let diff = mean1 - mean2;
    let (se, df) = match variant {
        TTestVariant::Student => {
            let df = n1 + n2 - 2.0;
            let pooled = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        TTestVariant::Welch => {
            let v1 = var1 / n1;
            let v2 = var2 / n2;
            let se = (v1 + v2).sqrt();
            let df = (v1 + v2).powi(2) / (v1 * v1 / (n1 - 1.0) + v2 * v2 / (n2 - 1.0));
            (se, df)
        }
    };

    let t_raw = diff / se;
    let (t, p) = if t_raw.is_finite() && df.is_finite() {
        (t_raw, math::t_two_sided_p(t_raw, df))
    } else {
        tracing::debug!(diff, se, "non-finite t statistic; reporting t = 0, p = 1");
        (0.0, 1.0)
    };

    let d_denominator = ((var1 + var2) / 2.0).sqrt();
    let d = if d_denominator > 0.0 {
        finite_or(diff / d_denominator, 0.0)
    } else {
        0.0
    };
    let magnitude = EffectMagnitude::for_cohens_d(d);

    let margin = Z_CRITICAL_95 * (var1 / n1 + var2 / n2).sqrt();
    let significant = p < alpha;
    let interpretation = if significant {
        format!(
            "Significant difference ({}) with {} effect size",
            describe_p(p),
            magnitude
        )
    } else {
        format!("No significant difference ({})", describe_p(p))
    };

    tracing::info!(
        variant = variant.label(),
        n1 = a.len(),
        n2 = b.len(),
        p,
        "two-sample test complete"
    );

    Ok(Analysis::Complete(TwoSampleTest {
        test_type: variant,
        test_name: variant.label().to_string(),
        groups: vec![
            GroupStats {
                label: labels.0.to_string(),
                n: a.len(),
                mean: round2(mean1),
                sd: round2(sd1),
                median: Some(round2(math::median(&a))),
            },
            GroupStats {
                label: labels.1.to_string(),
                n: b.len(),
                mean: round2(mean2),
                sd: round2(sd2),
                median: Some(round2(math::median(&b))),
            },
        ],
        statistics: TwoSampleStatistics {
            t_statistic: round3(t),
            df: round2(finite_or(df, 0.0)),
            p_value: round_p(p),
            mean_difference: round2(diff),
            ci_95: Interval {
                lower: round2(diff - margin),
                upper: round2(diff + margin),
            },
        },
        effect_size: EffectSize {
            measure: "cohens_d".to_string(),
            value: round3(d),
            interpretation: magnitude,
        },
        assumptions: Assumptions {
            normality,
            equal_variances: variance,
        },
        conclusion: Conclusion {
            significant,
            alpha,
            interpretation,
        },
    }))
}
