//! Correlation matrix with pairwise deletion and per-pair significance.

use survey_core::constants::{DEFAULT_ALPHA, MIN_CORRELATION_PAIRS};
use survey_core::rounding::{round3, round_p, round_to};
use survey_core::{correlation_span, AnalysisError, AnalysisResult, NamedColumn};

use super::types::{
    CorrelationMatrixResult, CorrelationMethod, CorrelationPair, CorrelationSummary, Direction,
    Strength,
};
use crate::math;

/// Coefficient, p-value and pair count for one pair of columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PairScore {
    pub r: f64,
    pub p: f64,
    pub n: usize,
}

impl PairScore {
    const NEUTRAL: Self = Self { r: 0.0, p: 1.0, n: 0 };
}

/// Rows where both cells are present and finite.
pub(crate) fn complete_pairs(x: &[Option<f64>], y: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Some((*a, *b)),
            _ => None,
        })
        .unzip()
}

/// Score one pair of columns. Fewer than the minimum pairs or a constant
/// side yields r = 0, p = 1.
pub(crate) fn score_pair(
    x: &[Option<f64>],
    y: &[Option<f64>],
    method: CorrelationMethod,
) -> PairScore {
    let (xs, ys) = complete_pairs(x, y);
    let n = xs.len();
    if n <= MIN_CORRELATION_PAIRS {
        return PairScore { n, ..PairScore::NEUTRAL };
    }
    let r = match method {
        CorrelationMethod::Pearson => math::pearson(&xs, &ys),
        CorrelationMethod::Spearman => {
            math::pearson(&math::average_ranks(&xs), &math::average_ranks(&ys))
        }
    };
    match r {
        Some(r) => PairScore {
            r,
            p: math::correlation_p(r, n),
            n,
        },
        None => {
            tracing::debug!(n, "constant column in pair; reporting r = 0, p = 1");
            PairScore { n, ..PairScore::NEUTRAL }
        }
    }
}

/// Compute the full correlation matrix for `columns`.
///
/// `method` is `"pearson"` or `"spearman"` (case-insensitive). Every column
/// must have the same length.
pub fn correlation_matrix(
    columns: &[NamedColumn],
    method: &str,
) -> AnalysisResult<CorrelationMatrixResult> {
    let method: CorrelationMethod = method.parse()?;
    if let Some(first) = columns.first() {
        if let Some(bad) = columns.iter().find(|c| c.len() != first.len()) {
            return Err(AnalysisError::ShapeMismatch {
                expected: first.len(),
                actual: bad.len(),
            });
        }
    }

    let _span = correlation_span!(method, columns.len()).entered();

    let k = columns.len();
    let mut r_matrix = vec![vec![0.0; k]; k];
    let mut p_matrix = vec![vec![0.0; k]; k];
    let mut significant = Vec::new();

    for i in 0..k {
        r_matrix[i][i] = 1.0;
        for j in (i + 1)..k {
            let score = score_pair(&columns[i].values, &columns[j].values, method);
            let r = round3(score.r);
            let p = round_p(score.p);
            r_matrix[i][j] = r;
            r_matrix[j][i] = r;
            p_matrix[i][j] = p;
            p_matrix[j][i] = p;

            if score.n > MIN_CORRELATION_PAIRS && score.p < DEFAULT_ALPHA {
                significant.push(CorrelationPair {
                    var1: columns[i].name.clone(),
                    var2: columns[j].name.clone(),
                    correlation: r,
                    p_value: p,
                    strength: Strength::from_r(score.r),
                    direction: Direction::from_r(score.r),
                    n_observations: score.n,
                });
            }
        }
    }

    significant.sort_by(|a, b| math::cmp_f64(&b.correlation.abs(), &a.correlation.abs()));

    let total_comparisons = k * k.saturating_sub(1) / 2;
    let interpretation = CorrelationSummary {
        total_comparisons,
        significant_count: significant.len(),
        percentage_significant: round_to(
            math::percentage(significant.len(), total_comparisons),
            1,
        ),
        strongest_correlation: significant.first().cloned(),
    };

    tracing::info!(
        %method,
        variables = k,
        significant = significant.len(),
        "correlation matrix complete"
    );

    Ok(CorrelationMatrixResult {
        method,
        variables: columns.iter().map(|c| c.name.clone()).collect(),
        correlation_matrix: r_matrix,
        p_values: p_matrix,
        significant_correlations: significant,
        interpretation,
    })
}
