//! Scan errors.

/// Errors raised while discovering or reading source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Walk error: {0}")]
    Walk(String),
}
