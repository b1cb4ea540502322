//! Configuration errors.

/// Errors raised while loading or validating configuration.
/// All of these are fatal at startup, before any scanning begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY environment variable must be set")]
    MissingApiKey,

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Unknown model identifier: {0}")]
    UnknownModel(String),
}
