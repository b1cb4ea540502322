//! The per-interface transform recipe.
//!
//! For every interface declaration in a unit: gather the accumulated
//! implementer contexts plus the unit's own source, prompt the
//! completion service, extract the Javadoc blocks from its answer, and
//! merge them onto the interface's undocumented methods by structural
//! signature match. Classes pass through untouched, as does every
//! method that already carries a comment.

use groqdoc_core::errors::PipelineError;
use groqdoc_core::wire::ChatMessage;
use tracing::{debug, warn};

use crate::client::GroqClient;
use crate::extract::extract_doc_comments;
use crate::index::ContextIndex;
use crate::parsers::{JavaParser, MethodDeclaration, TypeKind};
use crate::signature::same_signature;

/// Fixed instruction sent as the first message of every prompt.
pub const SYSTEM_PROMPT: &str = "You have been hired as a Javadoc writer. The user will send \
you a Java interface and you will write the Javadoc for the methods. There will be some extra \
examples of classes that implement the interface that you can use to give additional context \
when writing the Javadoc. Do not respond with anything other than a pure Javadoc string. Let \
me repeat, do not send anything other than a pure Javadoc string, including any and all \
markdown formatting.";

/// Comment attached to undocumented methods when the completion call
/// itself fails. Deliberately ordinary comment text: visibly wrong but
/// present, and the run carries on.
pub const GENERATION_FAILURE_PLACEHOLDER: &str =
    "/* There was an error generating this Javadoc. */";

pub struct DocRecipe<'a> {
    client: &'a GroqClient,
}

/// Outcome of transforming one unit.
#[derive(Debug)]
pub struct UnitTransform {
    /// Rewritten unit text; byte-identical to the input outside of the
    /// inserted comment blocks.
    pub text: String,
    pub changed: bool,
    /// Interfaces that received at least one generated comment.
    pub interfaces_documented: usize,
    /// Interfaces that fell back to the failure placeholder.
    pub placeholders_emitted: usize,
}

impl<'a> DocRecipe<'a> {
    pub fn new(client: &'a GroqClient) -> Self {
        Self { client }
    }

    /// Build the prompt: the system instruction, one user message per
    /// implementer context, then the interface's own unit source last.
    pub fn build_messages(&self, contexts: &[String], unit_source: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(contexts.len() + 2);
        messages.push(ChatMessage::system(SYSTEM_PROMPT));
        for context in contexts {
            messages.push(ChatMessage::user(context.clone()));
        }
        messages.push(ChatMessage::user(unit_source));
        messages
    }

    /// Transform one unit against the read-only index.
    ///
    /// Completion failures degrade to the placeholder and continue; a
    /// generated text that does not parse is a hard error for this
    /// unit's transform, surfaced to the pipeline.
    pub fn transform_unit(
        &self,
        parser: &mut JavaParser,
        source: &str,
        index: &ContextIndex,
    ) -> Result<UnitTransform, PipelineError> {
        let unit = parser.parse_unit(source)?;

        let mut edits: Vec<(usize, String)> = Vec::new();
        let mut interfaces_documented = 0;
        let mut placeholders_emitted = 0;

        for decl in &unit.types {
            if decl.kind != TypeKind::Interface {
                continue;
            }

            let identifier = unit.qualified_name(&decl.nested_name);
            let contexts = index.contexts(&identifier);
            debug!(
                interface = %identifier,
                implementer_contexts = contexts.len(),
                "generating documentation"
            );

            let messages = self.build_messages(contexts, source);
            match self.client.complete(&messages) {
                Ok(generated) => {
                    let extracted = extract_doc_comments(parser, &generated)?;
                    let mut documented = false;
                    for method in &decl.methods {
                        if method.has_comment() {
                            continue;
                        }
                        for (candidate, doc) in &extracted {
                            if same_signature(Some(candidate), Some(method))? {
                                edits.push(comment_edit(source, method, doc));
                                documented = true;
                                break;
                            }
                        }
                        // No match: generation may omit a method. Not an error.
                    }
                    if documented {
                        interfaces_documented += 1;
                    }
                }
                Err(error) => {
                    warn!(
                        interface = %identifier,
                        %error,
                        "completion failed, emitting placeholder Javadoc"
                    );
                    for method in &decl.methods {
                        if method.has_comment() {
                            continue;
                        }
                        edits.push(comment_edit(source, method, GENERATION_FAILURE_PLACEHOLDER));
                    }
                    placeholders_emitted += 1;
                }
            }
        }

        let text = apply_edits(source, edits);
        let changed = text != source;
        Ok(UnitTransform {
            text,
            changed,
            interfaces_documented,
            placeholders_emitted,
        })
    }
}

/// Produce the insertion that places `comment` above `method`, re-indented
/// to the method's own indentation. Continuation lines get one extra
/// space so `*` columns line up under the opening `/**`. A method that
/// shares its line with other tokens gets the comment directly before its
/// own first byte, so stacked comments stay adjacent to their methods.
fn comment_edit(source: &str, method: &MethodDeclaration, comment: &str) -> (usize, String) {
    let line_start = source[..method.range.start]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let prefix = &source[line_start..method.range.start];
    let (position, indent) = if prefix.chars().all(|c| c == ' ' || c == '\t') {
        (line_start, prefix)
    } else {
        (method.range.start, "")
    };

    let mut text = String::new();
    text.push_str(indent);
    for (i, line) in comment.lines().enumerate() {
        if i > 0 {
            text.push('\n');
            text.push_str(indent);
            text.push(' ');
        }
        text.push_str(line.trim_start());
    }
    text.push('\n');
    (position, text)
}

/// Apply insertions back-to-front so earlier byte offsets stay valid.
fn apply_edits(source: &str, mut edits: Vec<(usize, String)>) -> String {
    edits.sort_by(|a, b| b.0.cmp(&a.0));
    let mut text = source.to_string();
    for (position, insertion) in edits {
        text.insert_str(position, &insertion);
    }
    text
}
