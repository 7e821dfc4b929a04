//! Descriptive statistics engine: one summarizer per response kind.

pub mod categorical;
pub mod interval;
pub mod numeric;
pub mod types;

pub use interval::mean_with_ci;
pub use types::*;

use survey_core::config::classifier_config::DEFAULT_AFFIRMATIVE_TOKENS;
use survey_core::config::{AnalysisConfig, ClassifierConfig};
use survey_core::{constants, descriptive_span, RawValue, ResponseKind, ScaleBounds};

/// Kind-specific summarizer. Construct once from config and reuse.
#[derive(Debug, Clone)]
pub struct DescriptiveEngine {
    iqr_multiplier: f64,
    bin_threshold: f64,
    bin_count: usize,
    affirmative_tokens: Vec<String>,
}

impl Default for DescriptiveEngine {
    fn default() -> Self {
        Self {
            iqr_multiplier: constants::DEFAULT_IQR_MULTIPLIER,
            bin_threshold: constants::DEFAULT_NUMERIC_BIN_THRESHOLD,
            bin_count: constants::DEFAULT_NUMERIC_BIN_COUNT,
            affirmative_tokens: DEFAULT_AFFIRMATIVE_TOKENS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl DescriptiveEngine {
    pub fn new(analysis: &AnalysisConfig, classifier: &ClassifierConfig) -> Self {
        Self {
            iqr_multiplier: analysis.effective_iqr_multiplier(),
            bin_threshold: analysis.effective_numeric_bin_threshold(),
            bin_count: analysis.effective_numeric_bin_count(),
            affirmative_tokens: classifier.effective_affirmative_tokens(),
        }
    }

    pub fn iqr_multiplier(&self) -> f64 {
        self.iqr_multiplier
    }

    /// Summarize `values` as `kind`, using the 1–7 scale for scale questions.
    pub fn summarize(&self, values: &[RawValue], kind: ResponseKind) -> QuestionSummary {
        self.summarize_with_scale(values, kind, ScaleBounds::likert7())
    }

    /// Summarize with explicit scale bounds (ignored for non-scale kinds).
    pub fn summarize_with_scale(
        &self,
        values: &[RawValue],
        kind: ResponseKind,
        bounds: ScaleBounds,
    ) -> QuestionSummary {
        let span = descriptive_span!(kind, values.len());
        let _guard = span.enter();

        let summary = match kind {
            ResponseKind::Scale1To7 => {
                numeric::summarize_scale(values, bounds, self.iqr_multiplier)
            }
            ResponseKind::Numeric => numeric::summarize_numeric(
                values,
                self.iqr_multiplier,
                self.bin_threshold,
                self.bin_count,
            ),
            ResponseKind::YesNo => categorical::summarize_yes_no(values, &self.affirmative_tokens),
            ResponseKind::SingleChoice => categorical::summarize_single_choice(values),
            ResponseKind::MultiChoice => categorical::summarize_multi_choice(values),
            ResponseKind::Text => QuestionSummary::NotApplicable(EmptySummary::new(
                ResponseKind::Text,
                "Statistics not available for text/open questions",
            )),
        };

        tracing::info!(
            kind = %kind,
            has_data = summary.has_data(),
            n = summary.response_count(),
            "question summarized"
        );
        summary
    }
}
