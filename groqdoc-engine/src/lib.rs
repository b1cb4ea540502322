//! groqdoc-engine: two-pass Javadoc generation over a Java source tree.
//!
//! The scan pass indexes, for each interface, the printed source of every
//! class implementing it. The transform pass then prompts a completion
//! service with that context plus the interface's own source, re-parses
//! the generated text, and merges the extracted Javadoc blocks onto the
//! interface's undocumented methods by structural signature match.
//!
//! Subsystems:
//! - Scanner: deterministic `.java` discovery under a root
//! - Parsers: tree-sitter based structural model of one compilation unit
//! - Index: the read-only implementer context index built by pass one
//! - Signature: structural method identity across independent parses
//! - Extract: Javadoc harvesting from generated source text
//! - Client: single-attempt blocking completion client
//! - Recipe: the per-interface transform state machine
//! - Pipeline: the strict scan-then-transform driver

pub mod client;
pub mod extract;
pub mod index;
pub mod parsers;
pub mod pipeline;
pub mod recipe;
pub mod scanner;
pub mod signature;

pub use client::GroqClient;
pub use extract::extract_doc_comments;
pub use index::ContextIndex;
pub use parsers::{CompilationUnit, JavaParser, MethodDeclaration, Parameter, TypeDeclaration};
pub use pipeline::{Pipeline, PipelineOutcome, PipelineStats, TransformedUnit};
pub use recipe::{DocRecipe, UnitTransform, GENERATION_FAILURE_PLACEHOLDER, SYSTEM_PROMPT};
pub use scanner::SourceUnit;
pub use signature::{method_signature, same_signature};
