//! Configuration system for the survey engine.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod analysis_config;
pub mod cache_config;
pub mod classifier_config;
pub mod survey_config;

pub use analysis_config::AnalysisConfig;
pub use cache_config::CacheConfig;
pub use classifier_config::ClassifierConfig;
pub use survey_config::SurveyConfig;
