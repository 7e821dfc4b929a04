//! Scale and numeric summaries.

use rustc_hash::FxHashMap;
use survey_core::rounding::round2;
use survey_core::{RawValue, ResponseKind, ScaleBounds};

use super::types::{
    BinCount, BoxPlot, EmptySummary, NumericDistribution, NumericStatistics, NumericSummary,
    QuartileSummary, QuestionSummary, ScaleBucket, ScaleSummary, ValueCount,
};
use crate::math;

/// Split raw values into kept numbers and an excluded count.
/// Missing entries are neither kept nor excluded.
fn partition(values: &[RawValue], keep: impl Fn(f64) -> bool) -> (Vec<f64>, usize) {
    let mut kept = Vec::with_capacity(values.len());
    let mut excluded = 0;
    for raw in values.iter().filter(|v| !v.is_missing()) {
        match raw.as_number() {
            Some(v) if keep(v) => kept.push(v),
            _ => excluded += 1,
        }
    }
    (kept, excluded)
}

pub fn summarize_scale(
    values: &[RawValue],
    bounds: ScaleBounds,
    multiplier: f64,
) -> QuestionSummary {
    let (kept, excluded) = partition(values, |v| bounds.contains(v));
    if kept.is_empty() {
        return QuestionSummary::NoData(EmptySummary::new(
            ResponseKind::Scale1To7,
            "No responses for this question",
        ));
    }
    if excluded > 0 {
        tracing::debug!(excluded, "scale values outside bounds dropped");
    }

    let n = kept.len();
    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for v in &kept {
        *counts.entry(v.round() as i64).or_default() += 1;
    }
    let distribution = (bounds.min..=bounds.max)
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or(0);
            ScaleBucket {
                value,
                count,
                percentage: round2(math::percentage(count, n)),
            }
        })
        .collect();

    QuestionSummary::Scale(ScaleSummary {
        has_data: true,
        response_count: n,
        excluded,
        statistics: numeric_statistics(&kept, multiplier),
        distribution,
    })
}

pub fn summarize_numeric(
    values: &[RawValue],
    multiplier: f64,
    bin_threshold: f64,
    bin_count: usize,
) -> QuestionSummary {
    let (kept, excluded) = partition(values, |v| v.is_finite() && v > 0.0);
    if kept.is_empty() {
        return QuestionSummary::NoData(EmptySummary::new(
            ResponseKind::Numeric,
            "No responses for this question",
        ));
    }

    let sorted = math::sorted(&kept);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let distribution = if max - min > bin_threshold {
        NumericDistribution::Binned(bin_values(&kept, min, max, bin_count.max(1)))
    } else {
        NumericDistribution::Discrete(discrete_counts(&sorted))
    };

    QuestionSummary::Numeric(NumericSummary {
        has_data: true,
        response_count: kept.len(),
        excluded,
        statistics: numeric_statistics(&kept, multiplier),
        distribution,
    })
}

/// Equal-width bins over `[min, max]`; the maximum lands in the last bin.
fn bin_values(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<BinCount> {
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = ((v - min) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + i as f64 * width;
            let end = start + width;
            BinCount {
                range: format!("{}-{}", start as i64, end as i64),
                start: round2(start),
                end: round2(end),
                count,
            }
        })
        .collect()
}

fn discrete_counts(sorted: &[f64]) -> Vec<ValueCount> {
    let mut out: Vec<ValueCount> = Vec::new();
    for &v in sorted {
        match out.last_mut() {
            Some(last) if last.value == v => last.count += 1,
            _ => out.push(ValueCount { value: v, count: 1 }),
        }
    }
    for bucket in &mut out {
        bucket.value = round2(bucket.value);
    }
    out
}

/// Full statistics block for a non-empty vector.
pub fn numeric_statistics(values: &[f64], multiplier: f64) -> NumericStatistics {
    let sorted = math::sorted(values);
    let n = sorted.len();
    let min = sorted.first().copied().unwrap_or(0.0);
    let max = sorted.last().copied().unwrap_or(0.0);

    let q1 = math::quantile_sorted(&sorted, 0.25);
    let median = math::quantile_sorted(&sorted, 0.5);
    let q3 = math::quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - multiplier * iqr;
    let upper_fence = q3 + multiplier * iqr;

    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v < lower_fence || *v > upper_fence)
        .map(round2)
        .collect();
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= lower_fence)
        .unwrap_or(min);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= upper_fence)
        .unwrap_or(max);

    let quartiles = QuartileSummary {
        q1: round2(q1),
        median: round2(median),
        q3: round2(q3),
        iqr: round2(iqr),
        lower_fence: round2(lower_fence),
        upper_fence: round2(upper_fence),
        outliers: outliers.clone(),
    };
    let boxplot = BoxPlot {
        whisker_low: round2(whisker_low),
        q1: quartiles.q1,
        median: quartiles.median,
        q3: quartiles.q3,
        whisker_high: round2(whisker_high),
        outliers,
    };

    NumericStatistics {
        mean: round2(math::mean(values)),
        median: round2(median),
        std_dev: if n > 1 { round2(math::sample_sd(values)) } else { 0.0 },
        mode: mode(values).map(round2),
        min: round2(min),
        max: round2(max),
        quartiles,
        boxplot,
    }
}

/// Most frequent value, only when some value repeats. Ties go to the value
/// seen first.
fn mode(values: &[f64]) -> Option<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, c)) => *c += 1,
            None => counts.push((v, 1)),
        }
    }
    let mut best: Option<(f64, usize)> = None;
    for (v, c) in counts {
        if best.map_or(true, |(_, bc)| c > bc) {
            best = Some((v, c));
        }
    }
    best.filter(|(_, c)| *c > 1).map(|(v, _)| v)
}
