//! groqdoc-core: shared foundation for the groqdoc engine.
//!
//! This crate provides the pieces the engine builds on:
//! - Errors: one enum per subsystem, `thiserror` throughout
//! - Config: TOML + environment layered configuration with eager validation
//! - Wire: serde types for the chat-completions request/response format

pub mod config;
pub mod errors;
pub mod wire;

pub use config::GroqdocConfig;
pub use errors::{
    CompletionError, ConfigError, ParseError, PipelineError, PipelineResult, ScanError,
    SignatureError,
};
pub use wire::{ChatMessage, CompletionRequest, CompletionResponse, Model, Role};
