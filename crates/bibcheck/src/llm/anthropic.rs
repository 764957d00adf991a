//! Anthropic Claude API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{BibcheckError, Result};

use super::provider::{GenerationRequest, LlmConfig, LlmProvider};

/// Anthropic API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version.
const API_VERSION: &str = "2023-06-01";

/// Server-side web search tool version.
const WEB_SEARCH_TOOL: &str = "web_search_20250305";

/// Upper bound on searches per verification.
const MAX_SEARCHES: u32 = 5;

/// Anthropic Claude provider.
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl AnthropicProvider {
    /// Model used by [`AnthropicProvider::new`].
    pub const DEFAULT_MODEL: &'static str = "claude-sonnet-4-20250514";

    /// Create a new Anthropic provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::with_model(Self::DEFAULT_MODEL))
    }

    /// Create a new Anthropic provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| BibcheckError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = Self::env_key()?;
        Self::new(api_key)
    }

    /// Create from environment variable with custom configuration.
    pub fn from_env_with_config(config: LlmConfig) -> Result<Self> {
        let api_key = Self::env_key()?;
        Self::with_config(api_key, config)
    }

    fn env_key() -> Result<String> {
        std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            BibcheckError::Config("ANTHROPIC_API_KEY environment variable not set".to_string())
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| BibcheckError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        Ok(headers)
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": request.temperature,
            "system": request.system_instruction,
            "messages": [
                {
                    "role": "user",
                    "content": request.task_text
                }
            ]
        });

        if request.enable_grounded_search {
            body["tools"] = json!([{
                "type": WEB_SEARCH_TOOL,
                "name": "web_search",
                "max_uses": MAX_SEARCHES
            }]);
        }

        body
    }
}

impl LlmProvider for AnthropicProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers()?)
            .json(&self.request_body(request))
            .send()
            .map_err(|e| BibcheckError::Api(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(BibcheckError::Api(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| BibcheckError::Api(format!("Failed to parse API response: {}", e)))?;

        api_response.into_text()
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

/// Anthropic API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Content block in API response.
///
/// With web search enabled the answer is interleaved with tool-use and
/// search-result blocks, which carry no text.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

impl ApiResponse {
    fn into_text(self) -> Result<String> {
        let text: String = self
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .map(|block| block.text)
            .collect();

        if text.trim().is_empty() {
            return Err(BibcheckError::EmptyResponse);
        }
        Ok(text)
    }
}
