//! Error handling for groqdoc.
//! One error enum per subsystem, `thiserror` throughout, zero `anyhow`.

pub mod completion_error;
pub mod config_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod scan_error;
pub mod signature_error;

pub use completion_error::CompletionError;
pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scan_error::ScanError;
pub use signature_error::SignatureError;
