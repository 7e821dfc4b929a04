//! End-to-end checks across the engines through the public API.

use survey_analysis::correlation::{correlation_matrix, point_biserial};
use survey_analysis::descriptive::{mean_with_ci, DescriptiveEngine, QuestionSummary};
use survey_analysis::inference::{independence_test, one_way_anova, two_sample_test, TTestVariant};
use survey_analysis::regression::multiple_regression;
use survey_analysis::ResponseClassifier;
use survey_core::{Analysis, AnalysisError, Cohort, NamedColumn, RawValue, ResponseKind};

fn raw(values: &[f64]) -> Vec<RawValue> {
    values.iter().map(|v| RawValue::from(*v)).collect()
}

#[test]
fn classify_then_summarize_scale_question() {
    let classifier = ResponseClassifier::default();
    let text = "Su una scala da 1 a 7, quanto ti senti competente nell'uso pratico dell'IA?";
    let kind = classifier.classify(text, 7);
    assert_eq!(kind, ResponseKind::Scale1To7);

    let mut values = raw(&[1.0, 2.0, 7.0, 4.0, 9.0]);
    values.push(RawValue::Missing);
    values.push(RawValue::from("non so"));
    let summary = DescriptiveEngine::default().summarize(&values, kind);
    match summary {
        QuestionSummary::Scale(scale) => {
            assert_eq!(scale.response_count, 4);
            let total: usize = scale.distribution.iter().map(|b| b.count).sum();
            assert_eq!(total, 4);
            assert!(scale.distribution.iter().all(|b| (1..=7).contains(&b.value)));
        }
        other => panic!("expected scale summary, got {other:?}"),
    }
}

#[test]
fn outlier_is_fenced_but_counted() {
    let values = raw(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0]);
    let summary = DescriptiveEngine::default().summarize(&values, ResponseKind::Numeric);
    let QuestionSummary::Numeric(numeric) = summary else {
        panic!("expected numeric summary");
    };
    assert_eq!(numeric.response_count, 7);
    assert_eq!(numeric.statistics.quartiles.outliers, vec![100.0]);
    assert!(numeric.statistics.boxplot.whisker_high < 100.0);
}

#[test]
fn multi_choice_splits_on_both_separators() {
    let values = vec![RawValue::from("ChatGPT, Gemini; Claude")];
    let summary = DescriptiveEngine::default().summarize(&values, ResponseKind::MultiChoice);
    let QuestionSummary::MultiChoice(multi) = summary else {
        panic!("expected multi-choice summary");
    };
    assert_eq!(multi.unique_options, 3);
    assert!(multi.distribution.iter().all(|o| o.count == 1));
    assert_eq!(multi.avg_selections_per_response, 3.0);
}

#[test]
fn empty_vector_has_no_data() {
    let summary = DescriptiveEngine::default().summarize(&[], ResponseKind::YesNo);
    assert!(!summary.has_data());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["has_data"], false);
}

#[test]
fn shifted_samples_use_pooled_t_test() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [3.0, 4.0, 5.0, 6.0, 7.0];
    let result = two_sample_test(&a, &b, ("a", "b"))
        .unwrap()
        .complete()
        .unwrap();
    assert_eq!(result.test_type, TTestVariant::Student);
    assert_eq!(result.statistics.mean_difference, -2.0);
    assert!(result.effect_size.value < 0.0 && result.effect_size.value.is_finite());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["test_type"], "student");
    assert_eq!(json["statistics"]["mean_difference"], -2.0);
}

#[test]
fn cohort_by_usage_table() {
    let table = vec![vec![120.0, 80.0], vec![40.0, 60.0]];
    let rows = vec!["Students".to_string(), "Teachers".to_string()];
    let cols = vec![
        "Uses AI Daily (Yes)".to_string(),
        "Does Not Use Daily (No)".to_string(),
    ];
    let result = independence_test(&table, &rows, &cols).unwrap();
    assert!(result.statistics.yates_corrected);
    assert!(result.conclusion.significant);
    assert_eq!(result.contingency_table.percentages[0], vec![60.0, 40.0]);
}

#[test]
fn anova_posthoc_only_for_significant_multi_group() {
    let similar = vec![
        ("a".to_string(), vec![3.0, 4.0, 5.0, 4.0]),
        ("b".to_string(), vec![4.0, 3.0, 5.0, 4.0]),
        ("c".to_string(), vec![5.0, 4.0, 3.0, 4.0]),
    ];
    let result = one_way_anova(&similar).unwrap().complete().unwrap();
    assert!(!result.conclusion.significant);
    assert!(result.posthoc.is_none());
    assert!((0.0..=1.0).contains(&result.effect_size.value));
}

#[test]
fn correlation_rejects_method_before_shape() {
    let columns = [
        NamedColumn::complete("a", &[1.0, 2.0]),
        NamedColumn::complete("b", &[1.0]),
    ];
    assert!(matches!(
        correlation_matrix(&columns, "kendall"),
        Err(AnalysisError::InvalidParameter { .. })
    ));
}

#[test]
fn point_biserial_agrees_with_matrix() {
    let hours = NamedColumn::complete("hours", &[1.0, 3.0, 2.0, 5.0, 6.0, 4.0, 7.0, 6.5]);
    let daily = NamedColumn::complete("daily", &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0]);
    let pb = point_biserial(&hours, &daily).unwrap().complete().unwrap();
    let matrix = correlation_matrix(&[hours, daily], "pearson").unwrap();
    assert_eq!(Some(pb.correlation), matrix.coefficient("hours", "daily"));
}

#[test]
fn regression_requires_rows() {
    let x = NamedColumn::complete("x", &[1.0, 2.0, 3.0]);
    let outcome = multiple_regression(&[x], &[Some(1.0), Some(2.0), Some(3.0)]).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "insufficient_data");
    assert!(matches!(outcome, Analysis::InsufficientData(_)));
}

#[test]
fn mean_interval_contains_mean() {
    let interval = mean_with_ci(&[4.0, 5.0, 6.0, 5.0, 4.0, 6.0], 0.95)
        .unwrap()
        .complete()
        .unwrap();
    assert_eq!(interval.mean, 5.0);
    assert!(interval.ci_lower < 5.0 && interval.ci_upper > 5.0);
}

#[test]
fn catalogue_descriptors_are_complete() {
    let classifier = ResponseClassifier::default();
    assert_eq!(classifier.catalogue(Cohort::Student).len(), 37);
    assert_eq!(classifier.catalogue(Cohort::Teacher).len(), 38);
}
