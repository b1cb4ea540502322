//! Java parsing subsystem — tree-sitter backed structural model.
//!
//! The model is deliberately syntactic: declarations, parameter lists,
//! and attached comments, enough for identification and rewriting. No
//! semantic type-checking happens here; "printing" a declaration is
//! slicing its byte range out of the original text.

pub mod java;
pub mod types;

pub use java::JavaParser;
pub use types::{
    ByteRange, CommentKind, CompilationUnit, LeadingComment, MethodDeclaration, Parameter,
    TypeDeclaration, TypeKind,
};
