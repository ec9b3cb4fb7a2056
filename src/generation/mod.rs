//! Answer generation through a hosted model API

mod openai;
mod prompt;
mod provider;

pub use openai::OpenAiClient;
pub use prompt::PromptBuilder;
pub use provider::{ChatMessage, ModelProvider, Role};
