//! Tracing initialization and per-operation spans.
//! `tracing` with `EnvFilter`, filter read from `SURVEY_LOG`.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SURVEY_LOG";

/// Initialize the tracing/logging system.
///
/// Format: `SURVEY_LOG=survey_analysis=debug,survey_service=info`.
/// Falls back to `info` if `SURVEY_LOG` is unset or invalid.
/// Idempotent; a subscriber installed by the host application wins.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
