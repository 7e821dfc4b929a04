//! Chi-square test of independence on a contingency table.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use survey_core::constants::DEFAULT_ALPHA;
use survey_core::rounding::{describe_p, finite_or, round2, round3, round_p, round_to};
use survey_core::{inference_span, AnalysisError, AnalysisResult};

use super::effect::EffectMagnitude;
use super::types::{
    Conclusion, ContingencyTable, EffectSize, IndependenceStatistics, IndependenceTest,
};

/// Test whether the row and column variables of `table` are independent.
pub fn independence_test(
    table: &[Vec<f64>],
    row_labels: &[String],
    col_labels: &[String],
) -> AnalysisResult<IndependenceTest> {
    independence_test_with_alpha(table, row_labels, col_labels, DEFAULT_ALPHA)
}

pub fn independence_test_with_alpha(
    table: &[Vec<f64>],
    row_labels: &[String],
    col_labels: &[String],
    alpha: f64,
) -> AnalysisResult<IndependenceTest> {
    let _span = inference_span!("independence").entered();
    validate(table, row_labels, col_labels)?;

    let rows = table.len();
    let cols = table[0].len();
    let row_totals: Vec<f64> = table.iter().map(|r| r.iter().sum()).collect();
    let col_totals: Vec<f64> = (0..cols)
        .map(|j| table.iter().map(|r| r[j]).sum())
        .collect();
    let n: f64 = row_totals.iter().sum();

    let expected: Vec<Vec<f64>> = row_totals
        .iter()
        .map(|rt| col_totals.iter().map(|ct| rt * ct / n).collect())
        .collect();

    let df = (rows - 1) * (cols - 1);
    let yates = df == 1;
    let mut chi2 = 0.0;
    for (observed_row, expected_row) in table.iter().zip(&expected) {
        for (o, e) in observed_row.iter().zip(expected_row) {
            let mut deviation = (o - e).abs();
            if yates {
                deviation -= deviation.min(0.5);
            }
            chi2 += deviation * deviation / e;
        }
    }

    let (chi2, p) = if chi2.is_finite() {
        let p = ChiSquared::new(df as f64)
            .map(|dist| dist.sf(chi2))
            .unwrap_or(1.0);
        (chi2, finite_or(p, 1.0))
    } else {
        tracing::debug!("non-finite chi-square statistic; reporting 0, p = 1");
        (0.0, 1.0)
    };

    let min_dim = rows.min(cols);
    let v = finite_or((chi2 / (n * (min_dim - 1) as f64)).sqrt(), 0.0);
    let magnitude = EffectMagnitude::for_cramers_v(v, min_dim);

    let percentages = table
        .iter()
        .zip(&row_totals)
        .map(|(row, total)| row.iter().map(|o| round_to(o / total * 100.0, 1)).collect())
        .collect();

    let significant = p < alpha;
    let interpretation = if significant {
        format!(
            "Variables are dependent ({}) with {} effect size",
            describe_p(p),
            magnitude
        )
    } else {
        format!("Variables are independent ({})", describe_p(p))
    };

    tracing::info!(rows, cols, n, p, "independence test complete");

    Ok(IndependenceTest {
        test_name: "Chi-square test of independence".to_string(),
        contingency_table: ContingencyTable {
            observed: table.to_vec(),
            expected: expected
                .iter()
                .map(|r| r.iter().map(|e| round2(*e)).collect())
                .collect(),
            row_labels: row_labels.to_vec(),
            col_labels: col_labels.to_vec(),
            percentages,
        },
        statistics: IndependenceStatistics {
            chi_square: round3(chi2),
            df,
            p_value: round_p(p),
            n,
            yates_corrected: yates,
        },
        effect_size: EffectSize {
            measure: "cramers_v".to_string(),
            value: round3(v),
            interpretation: magnitude,
        },
        conclusion: Conclusion {
            significant,
            alpha,
            interpretation,
        },
    })
}

fn validate(
    table: &[Vec<f64>],
    row_labels: &[String],
    col_labels: &[String],
) -> AnalysisResult<()> {
    let rows = table.len();
    if rows < 2 {
        return Err(AnalysisError::malformed(format!(
            "need at least 2 rows, got {rows}"
        )));
    }
    let cols = table[0].len();
    if cols < 2 {
        return Err(AnalysisError::malformed(format!(
            "need at least 2 columns, got {cols}"
        )));
    }
    if let Some((i, row)) = table.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(AnalysisError::malformed(format!(
            "row {i} has {} cells, expected {cols}",
            row.len()
        )));
    }
    if row_labels.len() != rows {
        return Err(AnalysisError::invalid(
            "row_labels",
            format!("expected {rows} labels, got {}", row_labels.len()),
        ));
    }
    if col_labels.len() != cols {
        return Err(AnalysisError::invalid(
            "col_labels",
            format!("expected {cols} labels, got {}", col_labels.len()),
        ));
    }
    if table.iter().flatten().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(AnalysisError::malformed(
            "cells must be finite and non-negative",
        ));
    }
    if let Some(i) = table.iter().position(|r| r.iter().sum::<f64>() <= 0.0) {
        return Err(AnalysisError::malformed(format!("row {i} total is zero")));
    }
    if let Some(j) = (0..cols).find(|&j| table.iter().map(|r| r[j]).sum::<f64>() <= 0.0) {
        return Err(AnalysisError::malformed(format!("column {j} total is zero")));
    }
    Ok(())
}
