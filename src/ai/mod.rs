pub mod openai;
pub mod prompt;
pub mod provider;

pub use openai::OpenAiProvider;
pub use provider::{CompletionError, CompletionProvider, CompletionRequest};
