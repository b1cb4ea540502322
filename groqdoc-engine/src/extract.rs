//! Javadoc harvesting from generated source text.
//!
//! The completion service is asked to re-emit the interface with one
//! documentation block per method. That text is re-parsed as a
//! standalone compilation unit here; it must parse cleanly, because a
//! tree full of error nodes means the model ignored its instructions
//! and the transform for the enclosing interface has to fail loudly
//! rather than silently produce nothing.

use groqdoc_core::errors::ParseError;

use crate::parsers::{JavaParser, MethodDeclaration};

const PREVIEW_LEN: usize = 80;

/// Parse `text` and collect every method whose first attached comment is
/// a Javadoc block, paired with that block's text. Methods with no
/// comment, or with a plain line/block comment, are absent from the
/// result.
pub fn extract_doc_comments(
    parser: &mut JavaParser,
    text: &str,
) -> Result<Vec<(MethodDeclaration, String)>, ParseError> {
    let unit = parser.parse_unit(text)?;
    if unit.has_errors {
        return Err(ParseError::GeneratedSource {
            preview: text.chars().take(PREVIEW_LEN).collect(),
        });
    }

    let mut out = Vec::new();
    for decl in &unit.types {
        for method in &decl.methods {
            if let Some(doc) = method.leading_doc() {
                out.push((method.clone(), doc.text.clone()));
            }
        }
    }
    Ok(out)
}
