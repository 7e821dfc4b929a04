//! Point-biserial correlation for a continuous and a two-valued column.

use survey_core::constants::MIN_CORRELATION_PAIRS;
use survey_core::rounding::{round3, round_p};
use survey_core::{correlation_span, Analysis, AnalysisError, AnalysisResult, NamedColumn};

use super::matrix::{complete_pairs, score_pair};
use super::types::{CorrelationMethod, PointBiserial};

fn distinct_values(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut seen: Vec<f64> = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}

/// Correlate `continuous` with the two-valued `dichotomous` column.
///
/// Equivalent to Pearson's r with the two levels coded numerically; the
/// sign follows the numeric order of the levels.
pub fn point_biserial(
    continuous: &NamedColumn,
    dichotomous: &NamedColumn,
) -> AnalysisResult<Analysis<PointBiserial>> {
    if continuous.len() != dichotomous.len() {
        return Err(AnalysisError::ShapeMismatch {
            expected: continuous.len(),
            actual: dichotomous.len(),
        });
    }
    let _span = correlation_span!("point_biserial", 2usize).entered();

    let (_, levels) = complete_pairs(&continuous.values, &dichotomous.values);
    let distinct = distinct_values(levels.iter().copied());
    if distinct.len() != 2 {
        return Err(AnalysisError::invalid(
            "dichotomous",
            format!(
                "column {} must take exactly two values, found {}",
                dichotomous.name,
                distinct.len()
            ),
        ));
    }
    if levels.len() <= MIN_CORRELATION_PAIRS {
        return Ok(Analysis::insufficient(
            "too few complete pairs for a correlation",
            MIN_CORRELATION_PAIRS + 1,
            levels.len(),
        ));
    }

    let score = score_pair(&continuous.values, &dichotomous.values, CorrelationMethod::Pearson);
    Ok(Analysis::Complete(PointBiserial {
        continuous: continuous.name.clone(),
        dichotomous: dichotomous.name.clone(),
        correlation: round3(score.r),
        p_value: round_p(score.p),
        n_observations: score.n,
    }))
}

/// Names of the columns with at most two distinct present values.
pub fn dichotomous_columns(columns: &[NamedColumn]) -> Vec<String> {
    columns
        .iter()
        .filter(|c| {
            let finite = c.values.iter().flatten().copied().filter(|v| v.is_finite());
            let distinct = distinct_values(finite);
            (1..=2).contains(&distinct.len())
        })
        .map(|c| c.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_scores_in_coded_group_are_positive() {
        let hours = NamedColumn::complete("hours", &[1.0, 2.0, 1.5, 2.5, 5.0, 6.0, 5.5, 6.5]);
        let daily = NamedColumn::complete("daily", &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        let result = point_biserial(&hours, &daily).unwrap().complete().unwrap();
        assert!(result.correlation > 0.9);
        assert!(result.p_value < 0.01);
        assert_eq!(result.n_observations, 8);
    }

    #[test]
    fn rejects_non_dichotomous_column() {
        let x = NamedColumn::complete("x", &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = NamedColumn::complete("y", &[0.0, 1.0, 2.0, 0.0, 1.0]);
        assert!(matches!(
            point_biserial(&x, &y),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn too_few_pairs_is_insufficient() {
        let x = NamedColumn::complete("x", &[1.0, 2.0, 3.0]);
        let y = NamedColumn::complete("y", &[0.0, 1.0, 1.0]);
        assert!(!point_biserial(&x, &y).unwrap().is_complete());
    }

    #[test]
    fn detects_dichotomous_columns() {
        let columns = [
            NamedColumn::new("flag", vec![Some(1.0), None, Some(0.0), Some(1.0)]),
            NamedColumn::complete("constant", &[4.0, 4.0]),
            NamedColumn::complete("scale", &[1.0, 2.0, 3.0]),
            NamedColumn::new("empty", vec![None, None]),
        ];
        assert_eq!(dichotomous_columns(&columns), vec!["flag", "constant"]);
    }
}
