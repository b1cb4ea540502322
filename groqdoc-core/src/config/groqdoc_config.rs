//! Top-level groqdoc configuration with layered resolution.

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::wire::Model;

const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Resolved configuration for one run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GROQDOC_*`, `GROQ_API_KEY`)
/// 2. Project config (`groqdoc.toml` in the scan root)
/// 3. Compiled defaults
///
/// The API key is environment-only and required: loading fails before any
/// scanning begins when it is absent.
#[derive(Debug, Clone)]
pub struct GroqdocConfig {
    /// Bearer token for the completion endpoint. From `GROQ_API_KEY` only.
    pub api_key: String,
    /// Completion endpoint host. Overridable for testing via
    /// `GROQDOC_BASE_URL` or the project file; not part of normal operation.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: Model,
    /// Maximum source file size considered by the scanner, in bytes.
    pub max_file_size: u64,
}

/// Shape of `groqdoc.toml`. Unknown keys are ignored (forward-compatible).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    base_url: Option<String>,
    model: Option<String>,
    max_file_size: Option<u64>,
}

impl GroqdocConfig {
    /// Load configuration for a scan rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut base_url = DEFAULT_BASE_URL.to_string();
        let mut model = Model::default();
        let mut max_file_size = DEFAULT_MAX_FILE_SIZE;

        // Layer 2: project config
        let project_path = root.join("groqdoc.toml");
        if project_path.exists() {
            let file = Self::read_toml_file(&project_path)?;
            if let Some(url) = file.base_url {
                base_url = url;
            }
            if let Some(name) = file.model {
                model = Model::parse(&name).ok_or(ConfigError::UnknownModel(name))?;
            }
            if let Some(size) = file.max_file_size {
                max_file_size = size;
            }
        }

        // Layer 1: environment overrides
        if let Ok(url) = std::env::var("GROQDOC_BASE_URL") {
            base_url = url;
        }
        if let Ok(name) = std::env::var("GROQDOC_MODEL") {
            model = Model::parse(&name).ok_or(ConfigError::UnknownModel(name))?;
        }
        if let Ok(size) = std::env::var("GROQDOC_MAX_FILE_SIZE") {
            if let Ok(v) = size.parse::<u64>() {
                max_file_size = v;
            }
        }

        // Required process configuration, validated eagerly.
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let config = Self {
            api_key,
            base_url,
            model,
            max_file_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the resolved values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn read_toml_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
