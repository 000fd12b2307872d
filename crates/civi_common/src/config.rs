//! Civi configuration
//!
//! Configuration lives in {config dir}/civi/config.toml; $CIVI_CONFIG
//! overrides the location. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Endpoint the analyzer client talks to unless configured otherwise.
pub const DEFAULT_ANALYZER_URL: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiviConfig {
    /// Sentiment-analysis endpoint.
    #[serde(default = "default_analyzer_url")]
    pub analyzer_url: String,

    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Word ceiling for the statement buffer (valid: 1-5000).
    #[serde(default = "default_word_limit")]
    pub word_limit: usize,

    /// Candidate stance CSV for the match command.
    #[serde(default)]
    pub candidates_csv: Option<PathBuf>,

    /// How many candidates the match command reports (valid: 1-50).
    #[serde(default = "default_match_top_k")]
    pub match_top_k: usize,
}

fn default_analyzer_url() -> String {
    DEFAULT_ANALYZER_URL.to_string()
}

fn default_request_timeout() -> u64 {
    0
}

fn default_word_limit() -> usize {
    150
}

fn default_match_top_k() -> usize {
    5
}

impl Default for CiviConfig {
    fn default() -> Self {
        Self {
            analyzer_url: default_analyzer_url(),
            request_timeout_secs: default_request_timeout(),
            word_limit: default_word_limit(),
            candidates_csv: None,
            match_top_k: default_match_top_k(),
        }
    }
}

impl CiviConfig {
    /// Word limit clamped to the valid range.
    pub fn effective_word_limit(&self) -> usize {
        self.word_limit.clamp(1, 5000)
    }

    /// Match report size clamped to the valid range.
    pub fn effective_match_top_k(&self) -> usize {
        self.match_top_k.clamp(1, 50)
    }

    /// Discover the config file path.
    ///
    /// Priority:
    /// 1. $CIVI_CONFIG environment variable
    /// 2. {XDG config dir}/civi/config.toml
    pub fn discover_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CIVI_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("civi").join("config.toml"))
    }

    /// Load configuration from the given path, or the discovered default
    /// location. A missing file yields the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover_path(),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
