//! LLM provider trait and types.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::gemini::GeminiProvider;

/// One request to a generative model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user-turn text.
    pub task_text: String,

    /// Fixed instructions sent as the system prompt.
    pub system_instruction: String,

    /// Ask the provider to consult live web search before answering.
    pub enable_grounded_search: bool,

    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
}

/// Configuration for LLM providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0). Kept low so the verdict
    /// object comes back in a stable shape.
    pub temperature: f64,

    /// Whether verification requests ask for grounded web search.
    pub grounded_search: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: GeminiProvider::DEFAULT_MODEL.to_string(),
            max_tokens: 2048,
            temperature: 0.1,
            grounded_search: true,
        }
    }
}

impl LlmConfig {
    /// Default configuration with a different model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe (Send + Sync) so a checker can be
/// shared, even though a run only ever has one request in flight.
pub trait LlmProvider: Send + Sync {
    /// Send one request and return the model's text answer.
    ///
    /// Transport, authentication, quota and timeout failures are errors.
    /// The returned text is free-form; callers parse it.
    fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
