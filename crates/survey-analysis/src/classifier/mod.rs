//! Response classifier: question text to response kind.
//!
//! Deterministic pattern matching on lower-cased text. Closed-form patterns
//! are checked first (scale, numeric, multi-select, single-select, yes/no),
//! then open-ended phrasing. No match yields the configured fallback.

pub mod catalogue;
pub mod patterns;

use survey_core::config::ClassifierConfig;
use survey_core::{
    Cohort, QuestionCategory, QuestionDescriptor, QuestionType, ResponseKind, ScaleBounds,
};

use patterns::{any_match, matches};

/// Questions longer than this with explanatory cues read as open-ended.
const LONG_FORM_CHARS: usize = 250;

/// Demographic keywords only apply to the leading columns.
const DEMOGRAPHIC_MAX_COLUMN: usize = 8;

const DEMOGRAPHIC_KEYWORDS: &[&str] = &[
    "età",
    "genere",
    "scuola",
    "titolo",
    "studio",
    "percorso",
    "ordine",
    "materia",
    "settore",
    "anni hai",
    "attualmente insegni",
    "professione docente",
    "gender",
    "how old",
];

/// Category keyword table, checked in order after demographics.
const CATEGORY_KEYWORDS: &[(QuestionCategory, &[&str])] = &[
    (
        QuestionCategory::Competence,
        &["competent", "competenza", "pratico", "teorico"],
    ),
    (QuestionCategory::Trust, &["fiducioso", "fiducia", "trust"]),
    (QuestionCategory::Concern, &["preoccupa", "concern", "worried"]),
    (QuestionCategory::Training, &["formazione", "adeguata", "training"]),
    (
        QuestionCategory::Usage,
        &["utilizzi", " ore ", "settimana", "quotidian", "hours", "daily"],
    ),
    (
        QuestionCategory::Tools,
        &["strumenti", "quali sono", "preferiti", "tool"],
    ),
    (
        QuestionCategory::Personalization,
        &["prompt", "personaliz", "individualiz"],
    ),
    (QuestionCategory::Impact, &["cambierà", "miglior", "impact"]),
    (
        QuestionCategory::Challenges,
        &["difficoltà", "pro e contro", "pro e i contro", "non sono raccomandate"],
    ),
    (
        QuestionCategory::OpenReflection,
        &["secondo te", "esperienza", "esempi specifici"],
    ),
];

/// Maps question text to a [`ResponseKind`] and related tags.
#[derive(Debug, Clone)]
pub struct ResponseClassifier {
    fallback: ResponseKind,
}

impl Default for ResponseClassifier {
    fn default() -> Self {
        Self {
            fallback: ResponseKind::SingleChoice,
        }
    }
}

impl ResponseClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            fallback: config.effective_fallback_kind(),
        }
    }

    pub fn with_fallback(fallback: ResponseKind) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> ResponseKind {
        self.fallback
    }

    /// Classify a question. Never fails; empty or unmatched text yields the
    /// fallback kind.
    pub fn classify(&self, question_text: &str, column: usize) -> ResponseKind {
        let kind = match_kind(question_text).unwrap_or(self.fallback);
        tracing::trace!(column, kind = %kind, "classified question");
        kind
    }

    /// Open when the text reads as open-ended, closed otherwise.
    pub fn question_type(&self, question_text: &str) -> QuestionType {
        match match_kind(question_text) {
            Some(ResponseKind::Text) => QuestionType::Open,
            _ => QuestionType::Closed,
        }
    }

    /// Thematic category of a question.
    pub fn categorize(&self, question_text: &str, column: usize) -> QuestionCategory {
        let lower = question_text.to_lowercase();
        if column <= DEMOGRAPHIC_MAX_COLUMN
            && DEMOGRAPHIC_KEYWORDS.iter().any(|k| lower.contains(k))
        {
            return QuestionCategory::Demographic;
        }
        // Pad so whole-word keywords like " ore " match at the edges.
        let padded = format!(" {lower} ");
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| padded.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(QuestionCategory::Other)
    }

    /// Build the full descriptor of a question.
    pub fn describe(
        &self,
        cohort: Cohort,
        column: usize,
        question_text: &str,
    ) -> QuestionDescriptor {
        let kind = self.classify(question_text, column);
        let scale = (kind == ResponseKind::Scale1To7)
            .then(|| scale_bounds(question_text).unwrap_or_else(ScaleBounds::likert7));
        QuestionDescriptor {
            cohort,
            column,
            question_text: question_text.to_string(),
            question_type: self.question_type(question_text),
            category: self.categorize(question_text, column),
            kind,
            scale,
        }
    }

    /// Descriptor for a catalogued question, if `column` exists.
    pub fn describe_column(&self, cohort: Cohort, column: usize) -> Option<QuestionDescriptor> {
        catalogue::question_text(cohort, column).map(|text| self.describe(cohort, column, text))
    }

    /// Every catalogued question of `cohort`, classified.
    pub fn catalogue(&self, cohort: Cohort) -> Vec<QuestionDescriptor> {
        catalogue::questions(cohort)
            .iter()
            .enumerate()
            .map(|(column, text)| self.describe(cohort, column, text))
            .collect()
    }
}

/// Pattern-derived kind, or `None` when nothing matched.
fn match_kind(question_text: &str) -> Option<ResponseKind> {
    let text = question_text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if any_match(&[&patterns::RE_SCALE_IT, &patterns::RE_SCALE_EN], &text) {
        return Some(ResponseKind::Scale1To7);
    }
    if any_match(&[&patterns::RE_NUMERIC_IT, &patterns::RE_NUMERIC_EN], &text) {
        return Some(ResponseKind::Numeric);
    }
    if any_match(&[&patterns::RE_MULTI_IT, &patterns::RE_MULTI_EN], &text) {
        return Some(ResponseKind::MultiChoice);
    }
    if any_match(&[&patterns::RE_SINGLE_IT, &patterns::RE_SINGLE_EN], &text) {
        return Some(ResponseKind::SingleChoice);
    }
    if any_match(&[&patterns::RE_YES_NO_IT, &patterns::RE_YES_NO_EN], &text) {
        return Some(ResponseKind::YesNo);
    }
    if any_match(&[&patterns::RE_OPEN_IT, &patterns::RE_OPEN_EN], &text) {
        return Some(ResponseKind::Text);
    }
    if text.chars().count() > LONG_FORM_CHARS && matches(&patterns::RE_LONG_FORM_CUE, &text) {
        return Some(ResponseKind::Text);
    }
    None
}

/// Parse "da N a M" / "from N to M" / "N-M" bounds out of a scale question.
pub fn scale_bounds(question_text: &str) -> Option<ScaleBounds> {
    let text = question_text.to_lowercase();
    let re = patterns::RE_SCALE_BOUNDS.as_ref()?;
    let caps = re.captures(&text)?;
    let min = caps.get(1).or_else(|| caps.get(3))?.as_str().parse().ok()?;
    let max = caps.get(2).or_else(|| caps.get(4))?.as_str().parse().ok()?;
    (min < max).then_some(ScaleBounds { min, max })
}
