//! Error types for the runner.

use kidcalc_common::PacingError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the config file.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for a [`RunnerConfig`](crate::RunnerConfig).
    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A lesson input is outside the range the demos can show.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Pacing values are unusable.
    #[error("invalid pacing: {0}")]
    Pacing(#[from] PacingError),
}

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A demo id on the command line matched nothing in the registry.
    #[error("unknown demo '{id}' (known demos: {})", known.join(", "))]
    UnknownDemo { id: String, known: Vec<String> },

    /// I/O error writing the transcript.
    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),

    /// Transcript serialisation failed.
    #[error("failed to encode transcript: {0}")]
    Json(#[from] serde_json::Error),
}
