//! Signature computation errors.

/// Raised when a method parameter has a declaration shape the signature
/// matcher does not understand. This aborts the run rather than guessing:
/// a wrong guess would silently mis-attach documentation.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Unknown parameter declaration shape: {kind}")]
    UnsupportedParameter { kind: String },
}
