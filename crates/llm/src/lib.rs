//! Model gateway for the banking assistant agent
//!
//! Defines the [`ModelGateway`] trait the session layer talks to, the
//! subprocess-backed Ollama implementation, and system prompt
//! construction from the scenario catalog.

pub mod backend;
pub mod prompt;

pub use backend::{ModelGateway, OllamaConfig, OllamaProcessBackend};
pub use prompt::build_system_prompt;

use thiserror::Error;

/// Errors from the model gateway
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Failed to start model process: {0}")]
    Spawn(String),

    #[error("Model process failed: {0}")]
    Process(String),

    #[error("Model generation timed out")]
    Timeout,

    #[error("Model produced invalid output: {0}")]
    InvalidOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
