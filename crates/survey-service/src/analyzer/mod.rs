//! `SurveyAnalyzer`: caller-facing operations over the stored records.
//!
//! Validates string parameters, pulls columns through the field registry,
//! runs the engines, and memoizes serialized results in the [`ResultCache`].

mod results;

pub use results::*;

use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use survey_analysis::correlation::{self, dichotomous_columns, CorrelationMethod, PointBiserial};
use survey_analysis::descriptive::{mean_with_ci, EmptySummary};
use survey_analysis::inference::{
    independence_test_with_alpha, one_way_anova_with_alpha, two_sample_test_with_alpha,
    IndependenceTest,
};
use survey_analysis::regression::multiple_regression_with_min_rows;
use survey_analysis::{DescriptiveEngine, ResponseClassifier};
use survey_core::rounding::round2;
use survey_core::{
    service_span, Analysis, Cohort, NamedColumn, QuestionDescriptor, RawValue, ScaleBounds,
    ServiceError, SurveyConfig, SurveyErrorCode,
};

use crate::cache::ResultCache;
use crate::fields::{
    encode_yes_no, normalize_choice, SurveyRecord, STUDENT_CORRELATION_FIELDS,
    TEACHER_CORRELATION_FIELDS,
};
use crate::provider::DataProvider;
use crate::records::{StudentRecord, TeacherFilter, TeacherRecord};

type ServiceResult<T> = Result<T, ServiceError>;

/// Variables comparable across cohorts, with their display descriptions.
const COMPARABLE_VARIABLES: &[(&str, &str)] = &[
    ("practical_competence", "Practical AI Competence (1-7)"),
    ("theoretical_competence", "Theoretical AI Competence (1-7)"),
    ("trust_integration", "Trust in AI Integration (1-7)"),
    ("training_adequacy", "Training Adequacy (1-7)"),
    ("hours_daily", "Daily AI Usage Hours"),
];

const COMPETENCE_TYPES: &[(&str, &str)] = &[
    ("practical_competence", "Practical AI Competence (1-7)"),
    ("theoretical_competence", "Theoretical AI Competence (1-7)"),
];

const INTERVAL_VARIABLES: &[(&str, &str)] = &[
    ("practical_competence", "Competenza Pratica"),
    ("theoretical_competence", "Competenza Teorica"),
    ("trust_integration", "Fiducia Integrazione AI"),
    ("training_adequacy", "Adeguatezza Formazione"),
];

const STUDENT_PREDICTORS: &[(&str, &str)] = &[
    ("hours_daily", "Hours Daily Use"),
    ("theoretical_competence", "Theoretical Competence"),
    ("age", "Age"),
    ("uses_ai_daily_code", "Uses AI Daily (Yes=1)"),
];

const TEACHER_PREDICTORS: &[(&str, &str)] = &[
    ("hours_daily", "Hours Daily Use"),
    ("theoretical_competence", "Theoretical Competence"),
    ("age", "Age"),
    ("training_adequacy", "Training Adequacy"),
];

const NO_DATA_MESSAGE: &str = "No statistical data available for this question";

/// Entry point for every analysis the presentation layer asks for.
pub struct SurveyAnalyzer {
    provider: Arc<dyn DataProvider>,
    cache: ResultCache,
    classifier: ResponseClassifier,
    descriptive: DescriptiveEngine,
    alpha: f64,
    min_group_size: usize,
    min_regression_rows: usize,
    min_column_values: usize,
    confidence_level: f64,
}

impl SurveyAnalyzer {
    pub fn new(provider: Arc<dyn DataProvider>, config: &SurveyConfig) -> Self {
        Self {
            provider,
            cache: ResultCache::new(&config.cache),
            classifier: ResponseClassifier::new(&config.classifier),
            descriptive: DescriptiveEngine::new(&config.analysis, &config.classifier),
            alpha: config.analysis.effective_alpha(),
            min_group_size: config.analysis.effective_min_group_size(),
            min_regression_rows: config.analysis.effective_min_regression_rows(),
            min_column_values: config.analysis.effective_min_column_values(),
            confidence_level: config.analysis.effective_confidence_level(),
        }
    }

    /// Analyzer with compiled defaults.
    pub fn with_defaults(provider: Arc<dyn DataProvider>) -> Self {
        Self::new(provider, &SurveyConfig::default())
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Swap in freshly imported data. Every cached result is dropped.
    pub fn reimport(&mut self, provider: Arc<dyn DataProvider>) {
        let _span = service_span!("reimport", "all").entered();
        self.provider = provider;
        self.cache.clear();
        tracing::info!(
            students = self.provider.students().len(),
            teachers = self.provider.teachers().len(),
            "survey data reimported, result cache cleared"
        );
    }

    /// Classified catalogue of one cohort's questionnaire.
    pub fn questions(&self, respondent_type: &str) -> ServiceResult<Vec<QuestionDescriptor>> {
        let cohort =
            parse_cohort(respondent_type).inspect_err(|err| log_rejection("questions", err))?;
        Ok(self.classifier.catalogue(cohort))
    }

    /// Descriptor and kind-specific summary of one questionnaire column.
    ///
    /// `filter` only applies to teachers.
    pub fn question_stats(
        &self,
        respondent_type: &str,
        column: usize,
        filter: TeacherFilter,
    ) -> ServiceResult<QuestionStats> {
        let cohort =
            parse_cohort(respondent_type).inspect_err(|err| log_rejection("question_stats", err))?;
        let _span = service_span!("question_stats", cohort).entered();
        let teacher_filter = (cohort == Cohort::Teacher).then_some(filter);
        let key = format!("question_stats:{cohort}:{column}:{}", filter_key(teacher_filter));

        self.cached(key, || {
            let question = self
                .classifier
                .describe_column(cohort, column)
                .ok_or_else(|| ServiceError::UnknownQuestion {
                    cohort: cohort.to_string(),
                    column,
                })?;

            let stored = match cohort {
                Cohort::Student => {
                    let students = self.provider.students();
                    column_values(students.iter(), column)
                }
                Cohort::Teacher => {
                    let teachers = self.provider.teachers();
                    column_values(filter.apply(&teachers), column)
                }
            };

            let (field, summary) = match stored {
                Some((field, values)) => {
                    let bounds = question.scale.unwrap_or_else(ScaleBounds::likert7);
                    let summary =
                        self.descriptive.summarize_with_scale(&values, question.kind, bounds);
                    (Some(field.to_string()), summary)
                }
                None => {
                    tracing::debug!(column, %cohort, "column has no stored field");
                    let summary = survey_analysis::QuestionSummary::NoData(EmptySummary::new(
                        question.kind,
                        NO_DATA_MESSAGE,
                    ));
                    (None, summary)
                }
            };

            Ok(QuestionStats {
                question,
                field,
                teacher_filter,
                summary,
            })
        })
        .inspect_err(|err| log_rejection("question_stats", err))
    }

    /// Two-sample test of students against in-service teachers.
    pub fn compare_cohorts(&self, variable: &str) -> ServiceResult<CohortComparison> {
        let _span = service_span!("compare_cohorts", "both").entered();
        let result = lookup(COMPARABLE_VARIABLES, variable).and_then(|(name, description)| {
            self.cached(format!("compare_cohorts:{name}"), || {
                let students = self.provider.students();
                let teachers = self.provider.teachers();
                let student_values = numbers(students.iter(), name);
                let teacher_values = numbers(TeacherFilter::Active.apply(&teachers), name);

                let result = two_sample_test_with_alpha(
                    &student_values,
                    &teacher_values,
                    ("Students", "Teachers"),
                    self.alpha,
                )?;
                Ok(CohortComparison {
                    variable: name.to_string(),
                    variable_description: description.to_string(),
                    result,
                })
            })
        });
        result.inspect_err(|err| log_rejection("compare_cohorts", err))
    }

    /// Chi-square test of cohort against daily AI use.
    pub fn daily_usage_independence(&self) -> ServiceResult<UsageIndependence> {
        let _span = service_span!("daily_usage_independence", "both").entered();
        self.cached("independence:daily_usage".to_string(), || {
            let students = self.provider.students();
            let teachers = self.provider.teachers();
            let active = TeacherFilter::Active.apply(&teachers);

            let student_yes = students
                .iter()
                .filter(|s| uses_ai_daily(s.uses_ai_daily.as_deref()))
                .count();
            let teacher_yes = active
                .iter()
                .filter(|t| uses_ai_daily(t.uses_ai_daily.as_deref()))
                .count();
            let table = [
                [student_yes, students.len() - student_yes],
                [teacher_yes, active.len() - teacher_yes],
            ];

            Ok(UsageIndependence {
                variable: "daily_ai_usage".to_string(),
                description: "Relationship between user type and daily AI usage".to_string(),
                result: self.usage_table_test(table)?,
            })
        })
        .inspect_err(|err| log_rejection("daily_usage_independence", err))
    }

    fn usage_table_test(
        &self,
        table: [[usize; 2]; 2],
    ) -> ServiceResult<Analysis<IndependenceTest>> {
        let empty_row = table.iter().any(|row| row.iter().sum::<usize>() == 0);
        let empty_col = (0..2).any(|j| table.iter().map(|row| row[j]).sum::<usize>() == 0);
        if empty_row || empty_col {
            let available = table.iter().flatten().sum();
            return Ok(Analysis::insufficient(
                "both cohorts and both answers need at least one respondent",
                4,
                available,
            ));
        }

        let cells: Vec<Vec<f64>> = table
            .iter()
            .map(|row| row.iter().map(|&c| c as f64).collect())
            .collect();
        let rows = ["Students".to_string(), "Teachers".to_string()];
        let cols = [
            "Uses AI Daily (Yes)".to_string(),
            "Does Not Use Daily (No)".to_string(),
        ];
        let test = independence_test_with_alpha(&cells, &rows, &cols, self.alpha)?;
        Ok(Analysis::Complete(test))
    }

    /// One-way ANOVA of a competence score across school types (students)
    /// or school levels (in-service teachers).
    pub fn competence_by_school(
        &self,
        competence_type: &str,
        respondent_type: &str,
    ) -> ServiceResult<SchoolComparison> {
        let result = parse_competence(competence_type).and_then(|(name, description)| {
            let cohort = parse_cohort(respondent_type)?;
            let _span = service_span!("competence_by_school", cohort).entered();
            self.cached(format!("competence_by_school:{cohort}:{name}"), || {
                let (grouping, groups) = match cohort {
                    Cohort::Student => {
                        let students = self.provider.students();
                        ("school_type", school_groups(students.iter(), "school_type", name))
                    }
                    Cohort::Teacher => {
                        let teachers = self.provider.teachers();
                        let active = TeacherFilter::Active.apply(&teachers);
                        ("school_level", school_groups(active, "school_level", name))
                    }
                };

                let (kept, excluded): (Vec<_>, Vec<_>) = groups
                    .into_iter()
                    .partition(|(_, values)| values.len() >= self.min_group_size);
                let excluded_groups: Vec<String> =
                    excluded.into_iter().map(|(label, _)| label).collect();

                let result = if kept.len() < 2 {
                    Analysis::insufficient(
                        format!(
                            "need at least two groups with {} or more observations",
                            self.min_group_size
                        ),
                        2,
                        kept.len(),
                    )
                } else {
                    one_way_anova_with_alpha(&kept, self.alpha)?
                };

                Ok(SchoolComparison {
                    variable: name.to_string(),
                    variable_description: description.to_string(),
                    grouping_variable: grouping.to_string(),
                    respondent_type: cohort,
                    excluded_groups,
                    result,
                })
            })
        });
        result.inspect_err(|err| log_rejection("competence_by_school", err))
    }

    /// Pairwise correlations of one cohort's numeric and encoded fields.
    ///
    /// `filter` and `subject_type` narrow the teacher records and are
    /// ignored for students. Columns with too few valid values are dropped.
    pub fn correlation_matrix(
        &self,
        respondent_type: &str,
        method: &str,
        filter: TeacherFilter,
        subject_type: Option<&str>,
    ) -> ServiceResult<CohortCorrelation> {
        let result = parse_method(method).and_then(|method| {
            let cohort = parse_cohort(respondent_type)?;
            let _span = service_span!("correlation_matrix", cohort).entered();
            let teacher_filter = (cohort == Cohort::Teacher).then_some(filter);
            let subject_type = subject_type
                .map(str::trim)
                .filter(|s| !s.is_empty() && cohort == Cohort::Teacher);
            let key = format!(
                "correlation:{cohort}:{method}:{}:{}",
                filter_key(teacher_filter),
                subject_type.unwrap_or("-")
            );

            self.cached(key, || {
                let (n_total, columns) = match cohort {
                    Cohort::Student => {
                        let students = self.provider.students();
                        let columns = numeric_columns(students.iter(), STUDENT_CORRELATION_FIELDS);
                        (students.len(), columns)
                    }
                    Cohort::Teacher => {
                        let teachers = self.provider.teachers();
                        let selected: Vec<&TeacherRecord> = filter
                            .apply(&teachers)
                            .into_iter()
                            .filter(|t| {
                                subject_type.map_or(true, |s| {
                                    t.subject_type.as_deref().map(str::trim) == Some(s)
                                })
                            })
                            .collect();
                        let columns =
                            numeric_columns(selected.iter().copied(), TEACHER_CORRELATION_FIELDS);
                        (selected.len(), columns)
                    }
                };
                let encoded = |name: &str| match cohort {
                    Cohort::Student => StudentRecord::registry().is_encoded(name),
                    Cohort::Teacher => TeacherRecord::registry().is_encoded(name),
                };

                let (kept, dropped): (Vec<_>, Vec<_>) = columns
                    .into_iter()
                    .partition(|c| c.valid_count() > self.min_column_values);
                let excluded_variables: Vec<String> = dropped.into_iter().map(|c| c.name).collect();
                if !excluded_variables.is_empty() {
                    tracing::debug!(?excluded_variables, "columns dropped before correlation");
                }

                let dichotomous_variables = dichotomous_columns(&kept)
                    .into_iter()
                    .filter(|name| encoded(name.as_str()))
                    .collect();
                let result = correlation::correlation_matrix(&kept, method.name())?;

                Ok(CohortCorrelation {
                    respondent_type: cohort,
                    teacher_filter,
                    subject_type: subject_type.map(str::to_string),
                    n_total,
                    dichotomous_variables,
                    excluded_variables,
                    result,
                })
            })
        });
        result.inspect_err(|err| log_rejection("correlation_matrix", err))
    }

    /// Point-biserial correlation between a continuous and a binary field.
    pub fn point_biserial(
        &self,
        respondent_type: &str,
        continuous: &str,
        dichotomous: &str,
        filter: TeacherFilter,
    ) -> ServiceResult<Analysis<PointBiserial>> {
        let result = parse_cohort(respondent_type).and_then(|cohort| {
            let _span = service_span!("point_biserial", cohort).entered();
            let teacher_filter = (cohort == Cohort::Teacher).then_some(filter);
            let key = format!(
                "point_biserial:{cohort}:{continuous}:{dichotomous}:{}",
                filter_key(teacher_filter)
            );
            self.cached(key, || {
                let columns = match cohort {
                    Cohort::Student => {
                        let students = self.provider.students();
                        field_pair(students.iter(), continuous, dichotomous)?
                    }
                    Cohort::Teacher => {
                        let teachers = self.provider.teachers();
                        field_pair(filter.apply(&teachers), continuous, dichotomous)?
                    }
                };
                Ok(correlation::point_biserial(&columns[0], &columns[1])?)
            })
        });
        result.inspect_err(|err| log_rejection("point_biserial", err))
    }

    /// OLS regression of practical competence on usage and background.
    ///
    /// Students use daily AI use as the fourth predictor; in-service
    /// teachers use training adequacy.
    pub fn practical_competence_regression(
        &self,
        respondent_type: &str,
    ) -> ServiceResult<CompetenceRegression> {
        let result = parse_cohort(respondent_type).and_then(|cohort| {
            let _span = service_span!("practical_competence_regression", cohort).entered();
            self.cached(format!("regression:{cohort}:practical_competence"), || {
                let (predictors, target) = match cohort {
                    Cohort::Student => {
                        let students = self.provider.students();
                        regression_columns(students.iter(), STUDENT_PREDICTORS)?
                    }
                    Cohort::Teacher => {
                        let teachers = self.provider.teachers();
                        let active = TeacherFilter::Active.apply(&teachers);
                        regression_columns(active.iter().copied(), TEACHER_PREDICTORS)?
                    }
                };
                let result = multiple_regression_with_min_rows(
                    &predictors,
                    &target.values,
                    self.min_regression_rows,
                )?;
                Ok(CompetenceRegression {
                    dependent_variable: "Practical AI Competence (1-7)".to_string(),
                    respondent_type: cohort,
                    result,
                })
            })
        });
        result.inspect_err(|err| log_rejection("practical_competence_regression", err))
    }

    /// Means with t-based confidence intervals for both cohorts.
    ///
    /// Variables with no values on either side are left out.
    pub fn comparison_with_ci(&self, filter: TeacherFilter) -> ServiceResult<IntervalComparison> {
        let _span = service_span!("comparison_with_ci", "both").entered();
        self.cached(format!("comparison_with_ci:{filter}"), || {
            let students = self.provider.students();
            let teachers = self.provider.teachers();
            let selected = filter.apply(&teachers);

            let mut comparisons = Vec::with_capacity(INTERVAL_VARIABLES.len());
            for &(name, label) in INTERVAL_VARIABLES {
                let student_values = numbers(students.iter(), name);
                let teacher_values = numbers(selected.iter().copied(), name);
                let student_ci = mean_with_ci(&student_values, self.confidence_level)?.complete();
                let teacher_ci = mean_with_ci(&teacher_values, self.confidence_level)?.complete();
                let (Some(student_ci), Some(teacher_ci)) = (student_ci, teacher_ci) else {
                    tracing::debug!(variable = name, "no values on one side, skipped");
                    continue;
                };
                comparisons.push(VariableComparison {
                    variable: name.to_string(),
                    label: label.to_string(),
                    difference: round2(student_ci.mean - teacher_ci.mean),
                    students: student_ci,
                    teachers: teacher_ci,
                });
            }

            Ok(IntervalComparison {
                teacher_filter: filter,
                comparisons,
                note: format!(
                    "IC {:.0}% calcolati usando distribuzione t di Student",
                    self.confidence_level * 100.0
                ),
            })
        })
        .inspect_err(|err| log_rejection("comparison_with_ci", err))
    }

    /// Serve `key` from the cache, or compute, store, and return it.
    fn cached<T, F>(&self, key: String, compute: F) -> ServiceResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> ServiceResult<T>,
    {
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(key = %key, "cache hit");
            return Ok(T::deserialize(&*hit)?);
        }
        tracing::debug!(key = %key, "cache miss");
        let value = compute()?;
        self.cache.insert(key, serde_json::to_value(&value)?);
        Ok(value)
    }
}

impl std::fmt::Debug for SurveyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyAnalyzer")
            .field("cache", &self.cache)
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}

fn log_rejection(operation: &str, err: &ServiceError) {
    tracing::warn!(operation, code = err.error_code(), error = %err, "request rejected");
}

fn parse_cohort(respondent_type: &str) -> ServiceResult<Cohort> {
    Ok(Cohort::from_str(respondent_type)?)
}

fn parse_method(method: &str) -> ServiceResult<CorrelationMethod> {
    Ok(method.parse()?)
}

fn parse_competence(competence_type: &str) -> ServiceResult<(&'static str, &'static str)> {
    let wanted = competence_type.trim().to_lowercase();
    COMPETENCE_TYPES
        .iter()
        .find(|(name, _)| {
            *name == wanted || name.strip_suffix("_competence") == Some(wanted.as_str())
        })
        .copied()
        .ok_or_else(|| ServiceError::UnsupportedParameter {
            parameter: "competence_type".to_string(),
            value: competence_type.to_string(),
            allowed: allowed_names(COMPETENCE_TYPES),
        })
}

fn lookup(
    table: &'static [(&'static str, &'static str)],
    variable: &str,
) -> ServiceResult<(&'static str, &'static str)> {
    table
        .iter()
        .find(|(name, _)| *name == variable.trim())
        .copied()
        .ok_or_else(|| ServiceError::UnknownVariable {
            name: variable.to_string(),
            allowed: allowed_names(table),
        })
}

fn allowed_names(table: &[(&str, &str)]) -> String {
    table.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ")
}

fn filter_key(filter: Option<TeacherFilter>) -> &'static str {
    filter.map_or("-", |f| f.name())
}

fn uses_ai_daily(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| encode_yes_no(a) == 1)
}

/// Field behind `column` and its values, normalised for choice questions.
fn column_values<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R>,
    column: usize,
) -> Option<(&'static str, Vec<RawValue>)> {
    let registry = R::registry();
    let field = registry.field_for_column(column)?;
    let values = registry
        .values(records, field)?
        .into_iter()
        .map(|v| normalize_choice(field, v))
        .collect();
    Some((field, values))
}

/// Present, finite values of a numeric field.
fn numbers<'a, R: SurveyRecord>(records: impl IntoIterator<Item = &'a R>, field: &str) -> Vec<f64> {
    R::registry()
        .numeric_column(records, field)
        .map(|c| c.values.into_iter().flatten().collect())
        .unwrap_or_default()
}

fn numeric_columns<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R> + Clone,
    fields: &[&str],
) -> Vec<NamedColumn> {
    let registry = R::registry();
    fields
        .iter()
        .filter_map(|field| registry.numeric_column(records.clone(), field))
        .collect()
}

/// Non-zero scores grouped by a categorical field, groups in order of
/// first appearance.
fn school_groups<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R>,
    group_field: &str,
    value_field: &str,
) -> Vec<(String, Vec<f64>)> {
    let registry = R::registry();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        let label = registry
            .value(record, group_field)
            .map(|v| normalize_choice(group_field, v))
            .and_then(|v| v.as_text());
        let value = registry
            .value(record, value_field)
            .and_then(|v| v.as_number())
            .filter(|v| *v != 0.0);
        let (Some(label), Some(value)) = (label, value) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, values)) => values.push(value),
            None => groups.push((label, vec![value])),
        }
    }
    groups
}

fn field_pair<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R> + Clone,
    continuous: &str,
    dichotomous: &str,
) -> ServiceResult<[NamedColumn; 2]> {
    Ok([
        registered_column(records.clone(), continuous)?,
        registered_column(records, dichotomous)?,
    ])
}

/// Predictor columns under display names, plus the practical-competence
/// target.
fn regression_columns<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R> + Clone,
    predictors: &[(&str, &str)],
) -> ServiceResult<(Vec<NamedColumn>, NamedColumn)> {
    let columns = predictors
        .iter()
        .map(|&(field, label)| {
            registered_column(records.clone(), field)
                .map(|column| NamedColumn::new(label, column.values))
        })
        .collect::<ServiceResult<Vec<_>>>()?;
    let target = registered_column(records, "practical_competence")?;
    Ok((columns, target))
}

/// Numeric column of a field the cohort's registry knows.
fn registered_column<'a, R: SurveyRecord>(
    records: impl IntoIterator<Item = &'a R>,
    field: &str,
) -> ServiceResult<NamedColumn> {
    let registry = R::registry();
    registry
        .numeric_column(records, field)
        .ok_or_else(|| ServiceError::UnknownVariable {
            name: field.to_string(),
            allowed: registry.field_names().collect::<Vec<_>>().join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competence_accepts_short_names() {
        assert_eq!(parse_competence("Practical").unwrap().0, "practical_competence");
        assert_eq!(
            parse_competence("theoretical_competence").unwrap().0,
            "theoretical_competence"
        );
        let err = parse_competence("social").unwrap_err();
        assert!(err.to_string().contains("practical_competence, theoretical_competence"));
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let rows = [("Liceo", 4.0), ("Altro", 3.0), ("Liceo", 0.0), ("Liceo", 5.0)];
        let records: Vec<StudentRecord> = rows
            .into_iter()
            .map(|(school, score)| StudentRecord {
                school_type: Some(school.to_string()),
                practical_competence: Some(score),
                ..Default::default()
            })
            .collect();
        let groups = school_groups(records.iter(), "school_type", "practical_competence");
        assert_eq!(
            groups,
            vec![
                ("Liceo".to_string(), vec![4.0, 5.0]),
                ("Altro".to_string(), vec![3.0]),
            ]
        );
    }

    #[test]
    fn regression_columns_reject_unregistered_predictors() {
        let records = vec![StudentRecord::default(); 3];
        let predictors = [("hours_daily", "Hours"), ("shoe_size", "Shoes")];
        let err = regression_columns(records.iter(), &predictors).unwrap_err();
        match err {
            ServiceError::UnknownVariable { name, allowed } => {
                assert_eq!(name, "shoe_size");
                assert!(allowed.contains("hours_daily"));
            }
            other => panic!("expected UnknownVariable, got {other:?}"),
        }

        let (columns, target) =
            regression_columns(records.iter(), &[("hours_daily", "Hours")]).unwrap();
        assert_eq!(columns[0].name, "Hours");
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn filter_key_marks_student_requests() {
        assert_eq!(filter_key(None), "-");
        assert_eq!(filter_key(Some(TeacherFilter::Training)), "training");
    }
}
