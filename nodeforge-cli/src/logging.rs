//! Diagnostic output for the nodeforge CLI.
//!
//! Events go to `stderr` so the fixture written to `stdout` stays untouched.

use std::{env, str::FromStr};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "NODEFORGE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

/// Output format of the diagnostic stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: raw.to_owned(),
            }),
        }
    }
}

/// Errors raised while setting up diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `NODEFORGE_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value found in the environment, lossily decoded.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[source] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber unless one is already in place.
///
/// `NODEFORGE_LOG_FORMAT` selects the [`LogFormat`] and `RUST_LOG` the
/// filter, which defaults to `info`.
///
/// # Errors
/// Returns [`LoggingError`] when the format variable is not recognised or the
/// subscriber cannot be installed.
pub fn init_logging() -> Result<(), LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let format = match env::var_os(LOG_FORMAT_ENV) {
        Some(raw) => raw.to_string_lossy().parse()?,
        None => LogFormat::default(),
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(LoggingError::Install)
}
