//! Wire model for the chat-completions endpoint.
//! Request encoding is exact; response decoding is permissive (unknown
//! fields ignored, optional fields defaulted).

pub mod completion;
pub mod message;
pub mod model;

pub use completion::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse};
pub use message::{ChatMessage, Role};
pub use model::Model;
