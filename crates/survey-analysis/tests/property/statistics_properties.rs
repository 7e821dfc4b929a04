use proptest::prelude::*;
use survey_analysis::correlation::correlation_matrix;
use survey_analysis::descriptive::{DescriptiveEngine, QuestionSummary};
use survey_analysis::inference::one_way_anova;
use survey_analysis::regression::multiple_regression;
use survey_core::{NamedColumn, RawValue, ResponseKind};

fn cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        6 => (-50i32..50).prop_map(|v| Some(f64::from(v) / 2.0)),
    ]
}

proptest! {
    #[test]
    fn scale_values_stay_on_scale(raw in prop::collection::vec(-3i64..12, 0..60)) {
        let values: Vec<RawValue> = raw.iter().map(|v| RawValue::from(*v)).collect();
        let summary = DescriptiveEngine::default().summarize(&values, ResponseKind::Scale1To7);
        let on_scale = raw.iter().filter(|v| (1..=7).contains(*v)).count();
        match summary {
            QuestionSummary::Scale(scale) => {
                let total: usize = scale.distribution.iter().map(|b| b.count).sum();
                prop_assert_eq!(total, scale.response_count);
                prop_assert_eq!(scale.response_count, on_scale);
                prop_assert!(scale.distribution.iter().all(|b| (1..=7).contains(&b.value)));
                prop_assert!(scale.statistics.min >= 1.0 && scale.statistics.max <= 7.0);
            }
            QuestionSummary::NoData(_) => prop_assert_eq!(on_scale, 0),
            other => prop_assert!(false, "unexpected summary {:?}", other),
        }
    }

    #[test]
    fn correlation_matrix_is_symmetric(
        columns in prop::collection::vec(prop::collection::vec(cell(), 12), 1..5)
    ) {
        let named: Vec<NamedColumn> = columns
            .into_iter()
            .enumerate()
            .map(|(i, values)| NamedColumn::new(format!("v{i}"), values))
            .collect();
        let result = correlation_matrix(&named, "spearman").unwrap();
        let k = named.len();
        for i in 0..k {
            prop_assert_eq!(result.correlation_matrix[i][i], 1.0);
            prop_assert_eq!(result.p_values[i][i], 0.0);
            for j in 0..k {
                prop_assert_eq!(result.correlation_matrix[i][j], result.correlation_matrix[j][i]);
                prop_assert!(result.correlation_matrix[i][j].abs() <= 1.0);
                prop_assert!((0.0..=1.0).contains(&result.p_values[i][j]));
            }
        }
    }

    #[test]
    fn regression_fit_is_bounded(
        x1 in prop::collection::vec(cell(), 25),
        x2 in prop::collection::vec(cell(), 25),
        y in prop::collection::vec(cell(), 25),
    ) {
        let predictors = [NamedColumn::new("x1", x1), NamedColumn::new("x2", x2)];
        let outcome = multiple_regression(&predictors, &y);
        prop_assert!(outcome.is_ok());
        if let Some(result) = outcome.unwrap().complete() {
            let summary = result.model_summary;
            prop_assert!((0.0..=1.0).contains(&summary.r_squared));
            prop_assert!(summary.adjusted_r_squared <= summary.r_squared);
            prop_assert!(summary.rmse >= 0.0);
            prop_assert!(result.coefficients.iter().all(|c| c.coefficient.is_finite()));
        }
    }

    #[test]
    fn duplicated_predictor_is_zeroed(
        x in prop::collection::vec(cell(), 25),
        y in prop::collection::vec(cell(), 25),
    ) {
        let predictors = [NamedColumn::new("x", x.clone()), NamedColumn::new("copy", x)];
        if let Some(result) = multiple_regression(&predictors, &y).unwrap().complete() {
            prop_assert_eq!(result.coefficients[1].coefficient, 0.0);
            prop_assert_eq!(result.coefficients[1].std_coefficient, 0.0);
        }
    }

    #[test]
    fn eta_squared_is_a_proportion(
        groups in prop::collection::vec(prop::collection::vec(1u8..=7, 0..15), 2..6)
    ) {
        let labelled: Vec<(String, Vec<f64>)> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (format!("g{i}"), g.iter().map(|v| f64::from(*v)).collect()))
            .collect();
        if let Some(result) = one_way_anova(&labelled).unwrap().complete() {
            prop_assert!((0.0..=1.0).contains(&result.effect_size.value));
            prop_assert!((0.0..=1.0).contains(&result.statistics.p_value));
            let k = result.groups.len();
            prop_assert_eq!(
                result.posthoc.is_some(),
                result.conclusion.significant && k > 2
            );
        }
    }
}
