//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CacheConfig, ClassifierConfig};
use crate::errors::ConfigError;
use crate::types::ResponseKind;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "survey.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SURVEY_*`)
/// 2. Project config (`survey.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SurveyConfig {
    pub analysis: AnalysisConfig,
    pub classifier: ClassifierConfig,
    pub cache: CacheConfig,
}

impl SurveyConfig {
    /// Load configuration from `root/survey.toml` and the environment.
    /// A missing file is not an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "survey config loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SurveyConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SurveyConfig) -> Result<(), ConfigError> {
        let analysis = &config.analysis;
        if let Some(alpha) = analysis.alpha {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(invalid("analysis.alpha", "must be between 0.0 and 1.0 (exclusive)"));
            }
        }
        if let Some(level) = analysis.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(invalid(
                    "analysis.confidence_level",
                    "must be between 0.0 and 1.0 (exclusive)",
                ));
            }
        }
        if let Some(multiplier) = analysis.iqr_multiplier {
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(invalid("analysis.iqr_multiplier", "must be greater than 0"));
            }
        }
        if let Some(threshold) = analysis.numeric_bin_threshold {
            if !(threshold.is_finite() && threshold >= 0.0) {
                return Err(invalid("analysis.numeric_bin_threshold", "must be non-negative"));
            }
        }
        for (field, value) in [
            ("analysis.numeric_bin_count", analysis.numeric_bin_count),
            ("analysis.min_group_size", analysis.min_group_size),
            ("analysis.min_regression_rows", analysis.min_regression_rows),
        ] {
            if value == Some(0) {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        if config.cache.ttl_secs == Some(0) {
            return Err(invalid("cache.ttl_secs", "must be greater than 0"));
        }
        if config.cache.max_entries == Some(0) {
            return Err(invalid("cache.max_entries", "must be greater than 0"));
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SurveyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SurveyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values (and non-empty lists)
    /// in `other` override.
    fn merge(base: &mut SurveyConfig, other: &SurveyConfig) {
        // Analysis
        let (b, o) = (&mut base.analysis, &other.analysis);
        if o.alpha.is_some() {
            b.alpha = o.alpha;
        }
        if o.iqr_multiplier.is_some() {
            b.iqr_multiplier = o.iqr_multiplier;
        }
        if o.numeric_bin_threshold.is_some() {
            b.numeric_bin_threshold = o.numeric_bin_threshold;
        }
        if o.numeric_bin_count.is_some() {
            b.numeric_bin_count = o.numeric_bin_count;
        }
        if o.min_group_size.is_some() {
            b.min_group_size = o.min_group_size;
        }
        if o.min_regression_rows.is_some() {
            b.min_regression_rows = o.min_regression_rows;
        }
        if o.min_column_values.is_some() {
            b.min_column_values = o.min_column_values;
        }
        if o.confidence_level.is_some() {
            b.confidence_level = o.confidence_level;
        }

        // Classifier
        if other.classifier.fallback_kind.is_some() {
            base.classifier.fallback_kind = other.classifier.fallback_kind;
        }
        if !other.classifier.affirmative_tokens.is_empty() {
            base.classifier.affirmative_tokens = other.classifier.affirmative_tokens.clone();
        }

        // Cache
        if other.cache.enabled.is_some() {
            base.cache.enabled = other.cache.enabled;
        }
        if other.cache.ttl_secs.is_some() {
            base.cache.ttl_secs = other.cache.ttl_secs;
        }
        if other.cache.max_entries.is_some() {
            base.cache.max_entries = other.cache.max_entries;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SURVEY_ANALYSIS_ALPHA`, `SURVEY_CACHE_TTL_SECS`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut SurveyConfig) {
        if let Some(v) = env_parse::<f64>("SURVEY_ANALYSIS_ALPHA") {
            config.analysis.alpha = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SURVEY_ANALYSIS_IQR_MULTIPLIER") {
            config.analysis.iqr_multiplier = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SURVEY_ANALYSIS_NUMERIC_BIN_THRESHOLD") {
            config.analysis.numeric_bin_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SURVEY_ANALYSIS_NUMERIC_BIN_COUNT") {
            config.analysis.numeric_bin_count = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SURVEY_ANALYSIS_CONFIDENCE_LEVEL") {
            config.analysis.confidence_level = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SURVEY_ANALYSIS_MIN_GROUP_SIZE") {
            config.analysis.min_group_size = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SURVEY_ANALYSIS_MIN_REGRESSION_ROWS") {
            config.analysis.min_regression_rows = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SURVEY_ANALYSIS_MIN_COLUMN_VALUES") {
            config.analysis.min_column_values = Some(v);
        }
        if let Some(v) = env_parse::<ResponseKind>("SURVEY_CLASSIFIER_FALLBACK_KIND") {
            config.classifier.fallback_kind = Some(v);
        }
        if let Ok(val) = std::env::var("SURVEY_CLASSIFIER_AFFIRMATIVE_TOKENS") {
            let tokens: Vec<String> = val
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if !tokens.is_empty() {
                config.classifier.affirmative_tokens = tokens;
            }
        }
        if let Some(v) = env_parse::<bool>("SURVEY_CACHE_ENABLED") {
            config.cache.enabled = Some(v);
        }
        if let Some(v) = env_parse::<u64>("SURVEY_CACHE_TTL_SECS") {
            config.cache.ttl_secs = Some(v);
        }
        if let Some(v) = env_parse::<u64>("SURVEY_CACHE_MAX_ENTRIES") {
            config.cache.max_entries = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
