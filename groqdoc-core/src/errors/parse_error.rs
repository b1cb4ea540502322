//! Parse errors.

/// Errors raised by the Java parser.
///
/// Input units are parsed leniently (tree-sitter recovers from local
/// syntax errors), so `GeneratedSource` is reserved for text returned by
/// the completion service: that text must parse cleanly or the transform
/// of the enclosing interface fails hard.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load the Java grammar: {0}")]
    Grammar(String),

    #[error("Parser produced no syntax tree")]
    NoTree,

    #[error("Generated text did not parse as Java: {preview}")]
    GeneratedSource { preview: String },
}
