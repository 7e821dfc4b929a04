//! OLS fit via the normal equations on centred data.

use survey_core::constants::DEFAULT_MIN_REGRESSION_ROWS;
use survey_core::rounding::{finite_or, round3, round4};
use survey_core::{regression_span, Analysis, AnalysisError, AnalysisResult, NamedColumn};

use super::types::{
    Coefficient, ModelFit, ModelSummary, RegressionInterpretation, RegressionResult,
    ResidualSummary,
};
use crate::math;

/// Pivots below this fraction of a column's own variance, or variances
/// below this fraction of the largest one, are treated as zero.
const PIVOT_TOLERANCE: f64 = 1e-10;
const TOP_PREDICTORS: usize = 3;

/// Regress `target` on `predictors` with an intercept.
pub fn multiple_regression(
    predictors: &[NamedColumn],
    target: &[Option<f64>],
) -> AnalysisResult<Analysis<RegressionResult>> {
    multiple_regression_with_min_rows(predictors, target, DEFAULT_MIN_REGRESSION_ROWS)
}

/// Regress `target` on `predictors`, requiring at least `min_rows` complete
/// rows after listwise deletion.
pub fn multiple_regression_with_min_rows(
    predictors: &[NamedColumn],
    target: &[Option<f64>],
    min_rows: usize,
) -> AnalysisResult<Analysis<RegressionResult>> {
    if predictors.is_empty() {
        return Err(AnalysisError::invalid(
            "predictors",
            "at least one predictor is required",
        ));
    }
    if let Some(bad) = predictors.iter().find(|c| c.len() != target.len()) {
        return Err(AnalysisError::invalid(
            bad.name.clone(),
            format!("has {} values, target has {}", bad.len(), target.len()),
        ));
    }

    let p = predictors.len();
    let (rows, y) = complete_rows(predictors, target);
    let n = y.len();
    let _span = regression_span!(p, n).entered();

    let required = min_rows.max(p + 2);
    if n < required {
        return Ok(Analysis::insufficient(
            "too few complete rows for the number of predictors",
            required,
            n,
        ));
    }

    let x_means: Vec<f64> = (0..p)
        .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n as f64)
        .collect();
    let y_mean = math::mean(&y);

    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    for (row, yi) in rows.iter().zip(&y) {
        let dy = yi - y_mean;
        for j in 0..p {
            let dj = row[j] - x_means[j];
            xty[j] += dj * dy;
            for k in j..p {
                xtx[j][k] += dj * (row[k] - x_means[k]);
            }
        }
    }
    for j in 0..p {
        for k in 0..j {
            xtx[j][k] = xtx[k][j];
        }
    }

    let coefficients = solve(xtx, xty);
    let intercept = y_mean
        - coefficients
            .iter()
            .zip(&x_means)
            .map(|(b, m)| b * m)
            .sum::<f64>();

    let residuals: Vec<f64> = rows
        .iter()
        .zip(&y)
        .map(|(row, yi)| {
            let fitted: f64 = row.iter().zip(&coefficients).map(|(x, b)| x * b).sum();
            yi - intercept - fitted
        })
        .collect();

    let ss_res: f64 = residuals.iter().map(|e| e * e).sum();
    let ss_tot = math::sum_of_squares(&y);
    let r_squared = if ss_tot > 0.0 {
        finite_or(1.0 - ss_res / ss_tot, 0.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let adjusted = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / (n - p - 1) as f64;
    let rmse = (ss_res / n as f64).sqrt();

    let sd_y = math::sample_sd(&y);
    let betas: Vec<f64> = (0..p)
        .map(|j| {
            if sd_y > 0.0 {
                let column: Vec<f64> = rows.iter().map(|r| r[j]).collect();
                finite_or(coefficients[j] * math::sample_sd(&column) / sd_y, 0.0)
            } else {
                0.0
            }
        })
        .collect();

    let mut ranked: Vec<usize> = (0..p).collect();
    ranked.sort_by(|&a, &b| math::cmp_f64(&betas[b].abs(), &betas[a].abs()));
    let top_predictors = ranked
        .iter()
        .take(TOP_PREDICTORS)
        .map(|&j| predictors[j].name.clone())
        .collect();

    let residual_sorted = math::sorted(&residuals);

    tracing::info!(predictors = p, n, r_squared, "regression complete");

    Ok(Analysis::Complete(RegressionResult {
        model_summary: ModelSummary {
            n_observations: n,
            n_features: p,
            r_squared: round4(r_squared),
            adjusted_r_squared: round4(finite_or(adjusted, 0.0)),
            rmse: round3(rmse),
            intercept: round4(intercept),
        },
        coefficients: predictors
            .iter()
            .zip(coefficients.iter().zip(&betas))
            .map(|(column, (b, beta))| Coefficient {
                feature: column.name.clone(),
                coefficient: round4(*b),
                std_coefficient: round4(*beta),
                interpretation: format!(
                    "A one-unit increase in {} changes the outcome by {:.3}",
                    column.name, b
                ),
            })
            .collect(),
        residuals: ResidualSummary {
            mean: round4(math::mean(&residuals)),
            std: round4(math::sample_sd(&residuals)),
            min: round3(residual_sorted.first().copied().unwrap_or(0.0)),
            max: round3(residual_sorted.last().copied().unwrap_or(0.0)),
        },
        interpretation: RegressionInterpretation {
            variance_explained: format!(
                "{:.1}% of variance in outcome is explained by predictors",
                r_squared * 100.0
            ),
            model_fit: ModelFit::from_r_squared(r_squared),
            top_predictors,
        },
    }))
}

/// Listwise deletion: rows where every predictor and the target are present.
fn complete_rows(
    predictors: &[NamedColumn],
    target: &[Option<f64>],
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rows = Vec::new();
    let mut y = Vec::new();
    for (i, t) in target.iter().enumerate() {
        let Some(t) = t.filter(|v| v.is_finite()) else {
            continue;
        };
        let row: Option<Vec<f64>> = predictors
            .iter()
            .map(|c| c.values[i].filter(|v| v.is_finite()))
            .collect();
        if let Some(row) = row {
            rows.push(row);
            y.push(t);
        }
    }
    (rows, y)
}

/// Symmetric elimination in column order. A column whose remaining pivot is
/// negligible next to its own variance is constant or a combination of the
/// columns before it; its coefficient is fixed at zero and the rest of the
/// system is solved without it.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let p = b.len();
    let variances: Vec<f64> = (0..p).map(|i| a[i][i]).collect();
    let scale = variances.iter().copied().fold(0.0, f64::max);
    let mut kept = vec![false; p];

    for col in 0..p {
        let pivot = a[col][col];
        if variances[col] <= PIVOT_TOLERANCE * scale || pivot <= PIVOT_TOLERANCE * variances[col] {
            tracing::debug!(column = col, pivot, "dependent predictor; coefficient fixed at 0");
            continue;
        }
        kept[col] = true;
        for row in (col + 1)..p {
            let factor = a[row][col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..p {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; p];
    for row in (0..p).rev().filter(|&row| kept[row]) {
        let tail: f64 = ((row + 1)..p).map(|k| a[row][k] * x[k]).sum();
        x[row] = finite_or((b[row] - tail) / a[row][row], 0.0);
    }
    x
}
