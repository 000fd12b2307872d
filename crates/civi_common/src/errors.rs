//! Typed errors for the shared library

use thiserror::Error;

/// Failures talking to the sentiment-analysis endpoint.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Transport failure, timeout, or a body that did not decode as the
    /// expected score array.
    #[error("analyzer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("analyzer returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Failures loading or ranking candidate stance data.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("failed to read stance file: {0}")]
    Csv(#[from] csv::Error),

    #[error("stance file contains no usable rows")]
    Empty,
}

/// Failures loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
