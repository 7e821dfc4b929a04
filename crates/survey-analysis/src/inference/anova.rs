//! One-way ANOVA with Tukey HSD post-hoc comparisons.

use survey_core::constants::DEFAULT_ALPHA;
use survey_core::rounding::{describe_p, finite_or, round2, round3, round4, round_p};
use survey_core::{inference_span, Analysis, AnalysisResult};

use super::assumptions::f_upper_p;
use super::effect::EffectMagnitude;
use super::tukey::tukey_p;
use super::types::{
    AnovaStatistics, Conclusion, EffectSize, GroupStats, OneWayAnova, PairwiseComparison, PostHoc,
};
use crate::math;

const MIN_GROUPS: usize = 2;

/// One-way ANOVA over labelled groups at the conventional alpha.
pub fn one_way_anova(groups: &[(String, Vec<f64>)]) -> AnalysisResult<Analysis<OneWayAnova>> {
    one_way_anova_with_alpha(groups, DEFAULT_ALPHA)
}

/// One-way ANOVA over labelled groups, in caller order.
///
/// Empty groups are dropped. Tukey HSD runs only when the omnibus test is
/// significant and more than two groups remain.
pub fn one_way_anova_with_alpha(
    groups: &[(String, Vec<f64>)],
    alpha: f64,
) -> AnalysisResult<Analysis<OneWayAnova>> {
    let _span = inference_span!("one_way_anova").entered();

    let groups: Vec<(&str, Vec<f64>)> = groups
        .iter()
        .map(|(label, values)| {
            let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
            (label.as_str(), finite)
        })
        .filter(|(_, values)| !values.is_empty())
        .collect();

    let k = groups.len();
    if k < MIN_GROUPS {
        return Ok(Analysis::insufficient(
            "need at least two non-empty groups",
            MIN_GROUPS,
            k,
        ));
    }
    let total: usize = groups.iter().map(|(_, v)| v.len()).sum();
    if total <= k {
        return Ok(Analysis::insufficient(
            "need more observations than groups",
            k + 1,
            total,
        ));
    }

    let all: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let grand_mean = math::mean(&all);
    let ss_total = math::sum_of_squares(&all);
    let ss_between: f64 = groups
        .iter()
        .map(|(_, v)| v.len() as f64 * (math::mean(v) - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups.iter().map(|(_, v)| math::sum_of_squares(v)).sum();

    let df_between = k - 1;
    let df_within = total - k;
    let ms_within = ss_within / df_within as f64;
    let f_raw = (ss_between / df_between as f64) / ms_within;
    let (f, p) = if f_raw.is_finite() {
        (f_raw, f_upper_p(f_raw, df_between as f64, df_within as f64))
    } else {
        tracing::debug!(ss_between, ss_within, "non-finite F statistic; reporting F = 0, p = 1");
        (0.0, 1.0)
    };

    let eta_squared = if ss_total > 0.0 {
        finite_or(ss_between / ss_total, 0.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let magnitude = EffectMagnitude::for_eta_squared(eta_squared);

    let significant = p < alpha;
    let posthoc = (significant && k > 2).then(|| tukey_hsd(&groups, ms_within, df_within, alpha));

    let interpretation = if significant {
        format!(
            "Group means are different ({}) with {} effect size",
            describe_p(p),
            magnitude
        )
    } else {
        format!("Group means are not significantly different ({})", describe_p(p))
    };

    tracing::info!(groups = k, n = total, p, "one-way ANOVA complete");

    Ok(Analysis::Complete(OneWayAnova {
        test_name: "One-way ANOVA".to_string(),
        groups: groups
            .iter()
            .map(|(label, v)| GroupStats {
                label: label.to_string(),
                n: v.len(),
                mean: round2(math::mean(v)),
                sd: round2(math::sample_sd(v)),
                median: None,
            })
            .collect(),
        statistics: AnovaStatistics {
            f_statistic: round3(f),
            df_between,
            df_within,
            p_value: round_p(p),
        },
        effect_size: EffectSize {
            measure: "eta_squared".to_string(),
            value: round3(eta_squared),
            interpretation: magnitude,
        },
        posthoc,
        conclusion: Conclusion {
            significant,
            alpha,
            interpretation,
        },
    }))
}

/// Tukey–Kramer pairwise comparisons in group order.
fn tukey_hsd(groups: &[(&str, Vec<f64>)], ms_within: f64, df_within: usize, alpha: f64) -> PostHoc {
    let k = groups.len();
    let mut comparisons = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let (label_i, values_i) = &groups[i];
            let (label_j, values_j) = &groups[j];
            let diff = math::mean(values_i) - math::mean(values_j);
            let se = (ms_within / 2.0
                * (1.0 / values_i.len() as f64 + 1.0 / values_j.len() as f64))
                .sqrt();
            let q = diff.abs() / se;
            let p = if q.is_finite() {
                tukey_p(q, k, df_within as f64)
            } else {
                tracing::debug!(group1 = label_i, group2 = label_j, "degenerate Tukey statistic");
                if diff.abs() > 0.0 { 0.0 } else { 1.0 }
            };
            comparisons.push(PairwiseComparison {
                group1: label_i.to_string(),
                group2: label_j.to_string(),
                mean_diff: round2(diff),
                p_adjusted: round4(p),
                significant: p < alpha,
            });
        }
    }

    let significant_pairs = comparisons
        .iter()
        .filter(|c| c.significant)
        .map(|c| format!("{} vs {}", c.group1, c.group2))
        .collect();

    PostHoc {
        method: "Tukey HSD".to_string(),
        pairwise_comparisons: comparisons,
        significant_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(label: &str, values: &[f64]) -> (String, Vec<f64>) {
        (label.to_string(), values.to_vec())
    }

    #[test]
    fn separated_groups_run_posthoc() {
        let groups = vec![
            group("A", &[1.0, 2.0, 1.5, 2.5, 1.0, 2.0]),
            group("B", &[1.5, 2.0, 1.0, 2.5, 2.0, 1.5]),
            group("C", &[6.0, 7.0, 6.5, 5.5, 6.0, 7.0]),
        ];
        let result = one_way_anova(&groups).unwrap().complete().unwrap();
        assert!(result.conclusion.significant);
        assert_eq!(result.statistics.df_between, 2);
        assert_eq!(result.statistics.df_within, 15);
        assert!(result.effect_size.value > 0.9 && result.effect_size.value <= 1.0);
        assert_eq!(result.effect_size.interpretation, EffectMagnitude::Large);

        let posthoc = result.posthoc.unwrap();
        assert_eq!(posthoc.pairwise_comparisons.len(), 3);
        assert_eq!(posthoc.significant_pairs, vec!["A vs C", "B vs C"]);
        assert!(!posthoc.pairwise_comparisons[0].significant);
    }

    #[test]
    fn two_groups_skip_posthoc() {
        let groups = vec![
            group("A", &[1.0, 2.0, 1.5, 2.5]),
            group("B", &[6.0, 7.0, 6.5, 5.5]),
        ];
        let result = one_way_anova(&groups).unwrap().complete().unwrap();
        assert!(result.conclusion.significant);
        assert!(result.posthoc.is_none());
    }

    #[test]
    fn empty_groups_are_dropped() {
        let groups = vec![group("A", &[1.0, 2.0]), group("B", &[])];
        let outcome = one_way_anova(&groups).unwrap();
        assert!(!outcome.is_complete());
    }

    #[test]
    fn one_value_per_group_is_insufficient() {
        let groups = vec![group("A", &[1.0]), group("B", &[2.0])];
        match one_way_anova(&groups).unwrap() {
            Analysis::InsufficientData(info) => {
                assert_eq!(info.required, 3);
                assert_eq!(info.available, 2);
            }
            Analysis::Complete(_) => panic!("expected insufficient data"),
        }
    }

    #[test]
    fn identical_constant_groups_are_neutral() {
        let groups = vec![
            group("A", &[3.0, 3.0]),
            group("B", &[3.0, 3.0]),
            group("C", &[3.0, 3.0]),
        ];
        let result = one_way_anova(&groups).unwrap().complete().unwrap();
        assert_eq!(result.statistics.f_statistic, 0.0);
        assert_eq!(result.statistics.p_value, 1.0);
        assert_eq!(result.effect_size.value, 0.0);
        assert!(result.posthoc.is_none());
    }
}
