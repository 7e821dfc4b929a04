//! Mean with a Student's t confidence interval.

use statrs::distribution::{ContinuousCDF, StudentsT};
use survey_core::rounding::{round2, round3};
use survey_core::{Analysis, AnalysisError, AnalysisResult};

use super::types::MeanInterval;
use crate::math;

/// Mean, sd, standard error and a two-sided t interval on n − 1 df.
///
/// Non-finite values are dropped. A single observation yields a zero-width
/// interval.
pub fn mean_with_ci(values: &[f64], confidence: f64) -> AnalysisResult<Analysis<MeanInterval>> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(AnalysisError::invalid(
            "confidence",
            format!("{confidence} is not in (0, 1)"),
        ));
    }
    let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = clean.len();
    if n == 0 {
        return Ok(Analysis::insufficient("no observations", 1, 0));
    }

    let mean = math::mean(&clean);
    let sd = math::sample_sd(&clean);
    let se = sd / (n as f64).sqrt();
    let margin = if n > 1 {
        StudentsT::new(0.0, 1.0, (n - 1) as f64)
            .map(|t| t.inverse_cdf((1.0 + confidence) / 2.0) * se)
            .unwrap_or(0.0)
    } else {
        0.0
    };

    Ok(Analysis::Complete(MeanInterval {
        n,
        mean: round2(mean),
        sd: round2(sd),
        se: round3(se),
        ci_lower: round2(mean - margin),
        ci_upper: round2(mean + margin),
        median: round2(math::median(&clean)),
        confidence_level: confidence,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_brackets_the_mean() {
        let ci = mean_with_ci(&[4.0, 5.0, 6.0, 5.0, 5.0], 0.95)
            .unwrap()
            .complete()
            .unwrap();
        assert_eq!(ci.mean, 5.0);
        // sd = sqrt(0.5), se = 0.316, t(0.975, 4) = 2.776
        assert_eq!(ci.se, 0.316);
        assert_eq!(ci.ci_lower, 4.12);
        assert_eq!(ci.ci_upper, 5.88);
    }

    #[test]
    fn empty_input_is_insufficient() {
        let result = mean_with_ci(&[], 0.95).unwrap();
        assert!(!result.is_complete());
    }

    #[test]
    fn confidence_must_be_a_probability() {
        assert!(mean_with_ci(&[1.0, 2.0], 1.0).is_err());
    }
}
