//! End-to-end tests of `SurveyAnalyzer` over a small fixed data set.

use std::sync::Arc;

use survey_analysis::QuestionSummary;
use survey_core::config::CacheConfig;
use survey_core::rounding::round2;
use survey_core::{Analysis, Cohort, SurveyConfig, SurveyErrorCode};
use survey_service::records::{ACTIVE_TEACHER_STATUS, TRAINING_TEACHER_STATUS};
use survey_service::{
    InMemoryProvider, StudentRecord, SurveyAnalyzer, TeacherFilter, TeacherRecord,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn student(i: usize) -> StudentRecord {
    StudentRecord {
        code: Some(format!("S{i:03}")),
        age: Some(15 + (i % 7) as u32),
        gender: text(if i % 2 == 0 { "Maschio" } else { "Femmina" }),
        school_type: text(if i % 2 == 0 { "Liceo" } else { "Istituto Tecnico" }),
        practical_competence: Some(3.0 + ((i * 3) % 5) as f64 * 0.5),
        theoretical_competence: Some(2.0 + (i % 5) as f64),
        trust_integration: Some(4.0 + (i % 3) as f64),
        training_adequacy: Some(2.0 + (i % 4) as f64),
        uses_ai_daily: text(if i % 4 == 0 { "No" } else { "Sì" }),
        hours_daily: Some(1.0 + (i % 6) as f64),
        ..Default::default()
    }
}

fn active_teacher(i: usize) -> TeacherRecord {
    TeacherRecord {
        code: Some(format!("T{i:03}")),
        currently_teaching: text(ACTIVE_TEACHER_STATUS),
        age: Some(30 + i as u32),
        gender: text(if i % 3 == 0 { "Maschio" } else { "Femmina" }),
        school_level: text("Scuola secondaria di secondo grado (superiori)"),
        subject_type: text(if i % 2 == 0 { "STEM" } else { "Umanistiche" }),
        practical_competence: Some(2.0 + (i % 3) as f64),
        theoretical_competence: Some(3.0 + (i % 4) as f64),
        trust_integration: Some(3.0 + (i % 2) as f64),
        training_adequacy: Some(2.0 + (i % 5) as f64),
        uses_ai_daily: text(if i % 3 == 0 { "Sì" } else { "No" }),
        hours_daily: Some(((i * 2) % 7) as f64 * 0.5),
        ..Default::default()
    }
}

fn training_teacher(i: usize) -> TeacherRecord {
    TeacherRecord {
        code: Some(format!("P{i:03}")),
        currently_teaching: text(TRAINING_TEACHER_STATUS),
        practical_competence: Some(4.0 + (i % 2) as f64),
        theoretical_competence: Some(3.0),
        uses_ai_daily: text("Sì"),
        ..Default::default()
    }
}

/// 21 students (20 split between two school types, one in a third), 15
/// in-service teachers, 5 teachers in training.
fn fixture() -> InMemoryProvider {
    let mut students: Vec<StudentRecord> = (0..20).map(student).collect();
    students.push(StudentRecord {
        school_type: text("Istituto Professionale"),
        ..student(20)
    });
    let teachers = (0..15)
        .map(active_teacher)
        .chain((0..5).map(training_teacher))
        .collect();
    InMemoryProvider::new(students, teachers)
}

fn analyzer() -> SurveyAnalyzer {
    SurveyAnalyzer::with_defaults(Arc::new(fixture()))
}

#[test]
fn compare_cohorts_uses_active_teachers_only() {
    let comparison = analyzer().compare_cohorts("practical_competence").unwrap();
    assert_eq!(comparison.variable_description, "Practical AI Competence (1-7)");

    let test = comparison.result.complete().expect("both groups are large enough");
    assert_eq!(test.groups[0].label, "Students");
    assert_eq!(test.groups[0].n, 21);
    assert_eq!(test.groups[1].label, "Teachers");
    assert_eq!(test.groups[1].n, 15);
    assert!((0.0..=1.0).contains(&test.statistics.p_value));
}

#[test]
fn compare_cohorts_rejects_unknown_variable() {
    let err = analyzer().compare_cohorts("age").unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
    assert!(err.to_string().contains("hours_daily"));
}

#[test]
fn daily_usage_table_counts_yes_and_no() {
    let independence = analyzer().daily_usage_independence().unwrap();
    assert_eq!(independence.variable, "daily_ai_usage");

    let test = independence.result.complete().unwrap();
    assert_eq!(
        test.contingency_table.observed,
        vec![vec![15.0, 6.0], vec![5.0, 10.0]]
    );
    assert_eq!(test.contingency_table.row_labels, ["Students", "Teachers"]);
    assert_eq!(
        test.contingency_table.col_labels,
        ["Uses AI Daily (Yes)", "Does Not Use Daily (No)"]
    );
    assert!(test.statistics.yates_corrected);
}

#[test]
fn daily_usage_without_teachers_is_insufficient() {
    let provider = InMemoryProvider::new((0..10).map(student).collect(), Vec::new());
    let analyzer = SurveyAnalyzer::with_defaults(Arc::new(provider));
    let independence = analyzer.daily_usage_independence().unwrap();
    assert!(!independence.result.is_complete());
}

#[test]
fn school_anova_drops_small_groups() {
    let comparison = analyzer()
        .competence_by_school("practical", "student")
        .unwrap();
    assert_eq!(comparison.variable, "practical_competence");
    assert_eq!(comparison.grouping_variable, "school_type");
    assert_eq!(comparison.excluded_groups, ["Istituto Professionale"]);

    let anova = comparison.result.complete().unwrap();
    let labels: Vec<&str> = anova.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["Liceo", "Istituto Tecnico"]);
    assert!(anova.posthoc.is_none());
}

#[test]
fn teacher_school_levels_are_normalized_before_grouping() {
    let comparison = analyzer()
        .competence_by_school("theoretical_competence", "teacher")
        .unwrap();
    assert_eq!(comparison.grouping_variable, "school_level");
    match comparison.result {
        Analysis::InsufficientData(info) => {
            assert_eq!(info.required, 2);
            assert_eq!(info.available, 1);
        }
        Analysis::Complete(_) => panic!("one school level cannot be compared"),
    }
}

#[test]
fn school_anova_rejects_unknown_competence() {
    let err = analyzer()
        .competence_by_school("emotional", "student")
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");

    let err = analyzer()
        .competence_by_school("practical", "parent")
        .unwrap_err();
    assert!(err.to_string().contains("respondent_type"));
}

#[test]
fn student_correlation_drops_sparse_columns() {
    let report = analyzer()
        .correlation_matrix("student", "pearson", TeacherFilter::Active, None)
        .unwrap();
    assert_eq!(report.n_total, 21);
    assert_eq!(report.teacher_filter, None);
    assert!(report.excluded_variables.contains(&"hours_study".to_string()));
    assert!(report.excluded_variables.contains(&"uses_ai_study_code".to_string()));
    assert_eq!(
        report.dichotomous_variables,
        ["gender_code", "uses_ai_daily_code"]
    );

    let matrix = &report.result;
    assert!(!matrix.variables.contains(&"hours_study".to_string()));
    assert_eq!(matrix.coefficient("age", "age"), Some(1.0));
    let k = matrix.variables.len();
    assert_eq!(matrix.interpretation.total_comparisons, k * (k - 1) / 2);
}

#[test]
fn teacher_correlation_honours_subject_filter() {
    let report = analyzer()
        .correlation_matrix("teacher", "spearman", TeacherFilter::Active, Some("STEM"))
        .unwrap();
    assert_eq!(report.n_total, 8);
    assert_eq!(report.subject_type.as_deref(), Some("STEM"));
    // Eight teachers leave no column with enough values.
    assert!(report.result.variables.is_empty());

    let everyone = analyzer()
        .correlation_matrix("teacher", "spearman", TeacherFilter::All, None)
        .unwrap();
    assert_eq!(everyone.n_total, 20);
    assert!(everyone
        .dichotomous_variables
        .contains(&"currently_teaching_binary".to_string()));
}

#[test]
fn correlation_rejects_unknown_method() {
    let err = analyzer()
        .correlation_matrix("student", "kendall", TeacherFilter::Active, None)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");
    assert!(err.to_string().contains("method"));
}

#[test]
fn student_regression_names_predictors() {
    let regression = analyzer().practical_competence_regression("student").unwrap();
    assert_eq!(regression.dependent_variable, "Practical AI Competence (1-7)");
    assert_eq!(regression.respondent_type, Cohort::Student);

    let result = regression.result.complete().unwrap();
    assert_eq!(result.model_summary.n_observations, 21);
    let mut features: Vec<&str> = result
        .coefficients
        .iter()
        .map(|c| c.feature.as_str())
        .collect();
    features.sort_unstable();
    assert_eq!(
        features,
        ["Age", "Hours Daily Use", "Theoretical Competence", "Uses AI Daily (Yes=1)"]
    );
    assert!((0.0..=1.0).contains(&result.model_summary.r_squared));
}

#[test]
fn unanimous_daily_use_zeroes_its_coefficient() {
    let students = (0..20)
        .map(|i| StudentRecord {
            uses_ai_daily: text("Sì"),
            ..student(i)
        })
        .collect();
    let teachers = (0..15).map(active_teacher).collect();
    let provider = InMemoryProvider::new(students, teachers);
    let analyzer = SurveyAnalyzer::with_defaults(Arc::new(provider));

    let regression = analyzer.practical_competence_regression("student").unwrap();
    let result = regression.result.complete().unwrap();
    assert_eq!(result.model_summary.n_observations, 20);
    assert_eq!(result.model_summary.n_features, 4);
    let daily = result
        .coefficients
        .iter()
        .find(|c| c.feature == "Uses AI Daily (Yes=1)")
        .unwrap();
    assert_eq!(daily.coefficient, 0.0);
    assert_eq!(daily.std_coefficient, 0.0);
    assert!(result
        .coefficients
        .iter()
        .filter(|c| c.feature != "Uses AI Daily (Yes=1)")
        .any(|c| c.coefficient != 0.0));
    assert!((0.0..=1.0).contains(&result.model_summary.r_squared));
    assert_ne!(result.interpretation.top_predictors[0], "Uses AI Daily (Yes=1)");
}

#[test]
fn teacher_regression_uses_training_adequacy() {
    let regression = analyzer().practical_competence_regression("teacher").unwrap();
    let result = regression.result.complete().unwrap();
    assert_eq!(result.model_summary.n_observations, 15);
    assert!(result
        .coefficients
        .iter()
        .any(|c| c.feature == "Training Adequacy"));
}

#[test]
fn regression_with_few_rows_is_insufficient() {
    let provider = InMemoryProvider::new((0..6).map(student).collect(), Vec::new());
    let analyzer = SurveyAnalyzer::with_defaults(Arc::new(provider));
    let regression = analyzer.practical_competence_regression("student").unwrap();
    assert!(!regression.result.is_complete());
}

#[test]
fn interval_comparison_reports_differences() {
    let report = analyzer().comparison_with_ci(TeacherFilter::Active).unwrap();
    assert_eq!(report.comparisons.len(), 4);
    assert!(report.note.contains("95%"));
    for row in &report.comparisons {
        assert_eq!(row.difference, round2(row.students.mean - row.teachers.mean));
        assert!(row.students.ci_lower <= row.students.mean);
        assert!(row.teachers.ci_upper >= row.teachers.mean);
    }
    assert_eq!(report.comparisons[0].label, "Competenza Pratica");
}

#[test]
fn interval_comparison_skips_variables_without_teacher_values() {
    let report = analyzer().comparison_with_ci(TeacherFilter::Training).unwrap();
    let variables: Vec<&str> = report.comparisons.iter().map(|c| c.variable.as_str()).collect();
    assert_eq!(variables, ["practical_competence", "theoretical_competence"]);
    assert_eq!(report.comparisons[0].teachers.n, 5);
}

#[test]
fn question_stats_summarizes_mapped_column() {
    let stats = analyzer()
        .question_stats("student", 7, TeacherFilter::Active)
        .unwrap();
    assert_eq!(stats.field.as_deref(), Some("practical_competence"));
    assert_eq!(stats.teacher_filter, None);
    assert!(matches!(stats.summary, QuestionSummary::Scale(_)));
    assert_eq!(stats.summary.response_count(), 21);
}

#[test]
fn question_stats_for_unmapped_column_has_no_data() {
    let stats = analyzer()
        .question_stats("student", 17, TeacherFilter::Active)
        .unwrap();
    assert_eq!(stats.field, None);
    assert!(!stats.summary.has_data());
    match stats.summary {
        QuestionSummary::NoData(empty) => {
            assert_eq!(empty.message, "No statistical data available for this question")
        }
        other => panic!("expected no data, got {other:?}"),
    }
}

#[test]
fn question_stats_rejects_unknown_column() {
    let err = analyzer()
        .question_stats("teacher", 99, TeacherFilter::Active)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_QUESTION");
}

#[test]
fn teacher_question_stats_normalizes_school_level() {
    let stats = analyzer()
        .question_stats("teacher", 6, TeacherFilter::Active)
        .unwrap();
    assert_eq!(stats.teacher_filter, Some(TeacherFilter::Active));
    match stats.summary {
        QuestionSummary::SingleChoice(choice) => {
            assert_eq!(choice.response_count, 15);
            assert_eq!(choice.distribution.len(), 1);
            assert_eq!(choice.distribution[0].answer, "Scuola Secondaria di II Grado");
        }
        other => panic!("expected a choice summary, got {other:?}"),
    }
}

#[test]
fn point_biserial_on_encoded_field() {
    let analyzer = analyzer();
    let result = analyzer
        .point_biserial(
            "student",
            "practical_competence",
            "uses_ai_daily_code",
            TeacherFilter::Active,
        )
        .unwrap();
    let pb = result.complete().unwrap();
    assert_eq!(pb.n_observations, 21);
    assert!((-1.0..=1.0).contains(&pb.correlation));

    let err = analyzer
        .point_biserial("student", "practical_competence", "shoe_size", TeacherFilter::Active)
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
}

#[test]
fn questions_lists_catalogue() {
    let analyzer = analyzer();
    assert_eq!(analyzer.questions("student").unwrap().len(), 37);
    assert_eq!(analyzer.questions("teacher").unwrap().len(), 38);
}

#[test]
fn cached_results_match_fresh_ones() {
    let analyzer = analyzer();
    let first = analyzer.compare_cohorts("trust_integration").unwrap();
    assert!(analyzer.cache().get("compare_cohorts:trust_integration").is_some());
    let second = analyzer.compare_cohorts("trust_integration").unwrap();
    assert_eq!(first, second);

    let first = analyzer
        .correlation_matrix("student", "spearman", TeacherFilter::Active, None)
        .unwrap();
    let second = analyzer
        .correlation_matrix("student", "spearman", TeacherFilter::Active, None)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn reimport_replaces_data_and_clears_cache() {
    let mut analyzer = analyzer();
    let before = analyzer.compare_cohorts("hours_daily").unwrap();
    assert_eq!(before.result.as_complete().unwrap().groups[1].n, 15);

    let teachers = (0..12).map(active_teacher).collect();
    let provider = InMemoryProvider::new((0..20).map(student).collect(), teachers);
    analyzer.reimport(Arc::new(provider));
    assert!(analyzer.cache().get("compare_cohorts:hours_daily").is_none());

    let after = analyzer.compare_cohorts("hours_daily").unwrap();
    let groups = &after.result.as_complete().unwrap().groups;
    assert_eq!(groups[0].n, 20);
    assert_eq!(groups[1].n, 12);
}

#[test]
fn disabled_cache_still_serves_results() {
    let config = SurveyConfig {
        cache: CacheConfig {
            enabled: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };
    let analyzer = SurveyAnalyzer::new(Arc::new(fixture()), &config);
    assert!(analyzer.compare_cohorts("practical_competence").is_ok());
    assert!(analyzer.cache().is_empty());
}

#[test]
fn results_serialize_with_status_tag() {
    let comparison = analyzer().compare_cohorts("practical_competence").unwrap();
    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["result"]["status"], "complete");
    assert_eq!(json["variable"], "practical_competence");
}
