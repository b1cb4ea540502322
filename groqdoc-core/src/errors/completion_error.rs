//! Completion client errors.

/// Failures of the single completion round trip.
///
/// Callers treat every variant the same way: the call produced nothing
/// usable, and the placeholder path takes over. The variants exist for
/// logging, not for recovery decisions.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Http(String),

    #[error("Unexpected status code: {status}")]
    Status { status: u16 },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}
