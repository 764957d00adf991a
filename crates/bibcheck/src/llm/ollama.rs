//! Ollama local LLM provider implementation.
//!
//! Ollama allows running LLMs locally without API keys.
//! Install from: https://ollama.ai
//!
//! Local models cannot search the web, so their verdicts rest on whatever
//! the model memorised. Expect more `UNCERTAIN` results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{BibcheckError, Result};

use super::provider::{GenerationRequest, LlmConfig, LlmProvider};

/// Default Ollama API endpoint.
const DEFAULT_API_URL: &str = "http://localhost:11434/api/chat";

/// Ollama local LLM provider.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    config: LlmConfig,
    search_warning_shown: AtomicBool,
}

impl OllamaProvider {
    /// Model used by [`OllamaProvider::new`].
    pub const DEFAULT_MODEL: &'static str = "llama3.2";

    /// Create a new Ollama provider with default settings.
    ///
    /// Uses llama3.2 model by default. Make sure you've pulled it:
    /// `ollama pull llama3.2`
    pub fn new() -> Result<Self> {
        Self::with_model(Self::DEFAULT_MODEL)
    }

    /// Create with a specific model.
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        Self::with_config(LlmConfig::with_model(model))
    }

    /// Create with custom configuration.
    ///
    /// The endpoint honours `OLLAMA_HOST` when set.
    pub fn with_config(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120)) // Local models can be slower
            .build()
            .map_err(|e| BibcheckError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let api_url = std::env::var("OLLAMA_HOST")
            .map(|host| chat_url(&host))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            client,
            api_url,
            config,
            search_warning_shown: AtomicBool::new(false),
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.config.model,
            "stream": false,
            "format": "json",
            "options": {
                "temperature": request.temperature,
                "num_predict": self.config.max_tokens
            },
            "messages": [
                {
                    "role": "system",
                    "content": request.system_instruction
                },
                {
                    "role": "user",
                    "content": request.task_text
                }
            ]
        })
    }
}

impl LlmProvider for OllamaProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        if request.enable_grounded_search && !self.search_warning_shown.swap(true, Ordering::Relaxed)
        {
            tracing::warn!(
                model = %self.config.model,
                "Ollama models cannot search the web; verdicts are not grounded"
            );
        }

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers())
            .json(&self.request_body(request))
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    BibcheckError::Api(
                        "Failed to connect to Ollama. Is it running? Start with: ollama serve"
                            .to_string(),
                    )
                } else {
                    BibcheckError::Api(format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            // Check for model not found error
            if error_text.contains("not found") {
                return Err(BibcheckError::Api(format!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    self.config.model, self.config.model
                )));
            }

            return Err(BibcheckError::Api(format!(
                "Ollama error ({}): {}",
                status, error_text
            )));
        }

        let api_response: OllamaResponse = response
            .json()
            .map_err(|e| BibcheckError::Api(format!("Failed to parse Ollama response: {}", e)))?;

        let content = api_response.message.content;
        if content.trim().is_empty() {
            return Err(BibcheckError::EmptyResponse);
        }
        Ok(content)
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

fn chat_url(host: &str) -> String {
    format!("{}/api/chat", host.trim_end_matches('/'))
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
}
