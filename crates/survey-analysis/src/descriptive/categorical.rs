//! Yes/no, single-choice and multi-choice summaries.

use rustc_hash::FxHashMap;
use survey_core::rounding::round2;
use survey_core::{RawValue, ResponseKind};

use super::types::{
    AnswerCount, ChoiceSummary, EmptySummary, MultiChoiceSummary, OptionCount, QuestionSummary,
    YesNoSummary,
};
use crate::math;

/// Non-missing, non-blank answers, trimmed.
fn answers(values: &[RawValue]) -> Vec<String> {
    values.iter().filter_map(RawValue::as_text).collect()
}

/// Counts in first-appearance order.
fn tally<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}

/// Sort by count descending; the stable sort keeps first appearance on ties.
fn by_frequency<'a>(mut counts: Vec<(&'a str, usize)>) -> Vec<(&'a str, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn answer_counts(counts: &[(&str, usize)], total: usize) -> Vec<AnswerCount> {
    counts
        .iter()
        .map(|(answer, count)| AnswerCount {
            answer: answer.to_string(),
            count: *count,
            percentage: round2(math::percentage(*count, total)),
        })
        .collect()
}

/// True when the trimmed lower-case answer equals a token, or starts with one
/// followed by a non-alphanumeric character.
pub fn is_affirmative(answer: &str, tokens: &[String]) -> bool {
    let lower = answer.trim().to_lowercase();
    tokens.iter().any(|token| match lower.strip_prefix(token.as_str()) {
        Some(rest) => rest.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    })
}

pub fn summarize_yes_no(values: &[RawValue], affirmative: &[String]) -> QuestionSummary {
    let answers = answers(values);
    if answers.is_empty() {
        return QuestionSummary::NoData(EmptySummary::new(
            ResponseKind::YesNo,
            "No responses for this question",
        ));
    }
    let total = answers.len();
    let total_yes = answers
        .iter()
        .filter(|a| is_affirmative(a, affirmative))
        .count();
    let counts = by_frequency(tally(answers.iter().map(String::as_str)));
    let yes_percentage = round2(math::percentage(total_yes, total));

    QuestionSummary::YesNo(YesNoSummary {
        has_data: true,
        response_count: total,
        total_yes,
        total_no: total - total_yes,
        yes_percentage,
        no_percentage: round2(100.0 - yes_percentage),
        distribution: answer_counts(&counts, total),
    })
}

pub fn summarize_single_choice(values: &[RawValue]) -> QuestionSummary {
    let answers = answers(values);
    if answers.is_empty() {
        return QuestionSummary::NoData(EmptySummary::new(
            ResponseKind::SingleChoice,
            "No responses for this question",
        ));
    }
    let total = answers.len();
    let counts = by_frequency(tally(answers.iter().map(String::as_str)));
    QuestionSummary::SingleChoice(ChoiceSummary {
        has_data: true,
        response_count: total,
        unique_answers: counts.len(),
        distribution: answer_counts(&counts, total),
    })
}

/// Split a multi-select answer on `,` and `;`, dropping empty options.
pub fn split_options(answer: &str) -> Vec<&str> {
    answer
        .split([',', ';'])
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .collect()
}

pub fn summarize_multi_choice(values: &[RawValue]) -> QuestionSummary {
    let answers = answers(values);
    let selections: Vec<Vec<&str>> = answers.iter().map(|a| split_options(a)).collect();
    let total_selections: usize = selections.iter().map(Vec::len).sum();
    if total_selections == 0 {
        return QuestionSummary::NoData(EmptySummary::new(
            ResponseKind::MultiChoice,
            "No valid options found",
        ));
    }

    let total_responses = answers.len();
    let responses_with_selection = selections.iter().filter(|s| !s.is_empty()).count();
    let counts = by_frequency(tally(selections.iter().flatten().copied()));
    let (most_selected, most_selected_count) = counts
        .first()
        .map(|(opt, c)| (Some(opt.to_string()), *c))
        .unwrap_or((None, 0));

    let distribution = counts
        .iter()
        .map(|(option, count)| OptionCount {
            option: option.to_string(),
            count: *count,
            percentage: round2(math::percentage(*count, total_responses)),
            selection_percentage: round2(math::percentage(*count, total_selections)),
        })
        .collect();

    QuestionSummary::MultiChoice(MultiChoiceSummary {
        has_data: true,
        total_responses,
        responses_with_selection,
        total_selections,
        unique_options: counts.len(),
        avg_selections_per_response: round2(total_selections as f64 / total_responses as f64),
        most_selected,
        most_selected_count,
        distribution,
    })
}
