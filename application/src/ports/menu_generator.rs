//! Menu generator port
//!
//! Defines the interface for the external model that writes menus.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking the generator for menus
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to a menu-generation model
///
/// This port defines how the application layer asks for generated menus.
/// Implementations (adapters) live in the infrastructure layer. The
/// response is raw model text; parsing and validation happen in the use case.
#[async_trait]
pub trait MenuGenerator: Send + Sync {
    /// Send a system prompt and user prompt, returning the raw response text
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, GeneratorError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "generator"
    }
}
