//! OpenAI GPT API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{BibcheckError, Result};

use super::provider::{GenerationRequest, LlmConfig, LlmProvider};

/// OpenAI API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI GPT provider.
///
/// Grounded search requires one of the `*-search-preview` models, which
/// accept `web_search_options` but reject a `temperature` parameter.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenAIProvider {
    /// Model used by [`OpenAIProvider::new`].
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-search-preview";

    /// Create a new OpenAI provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::with_model(Self::DEFAULT_MODEL))
    }

    /// Create a new OpenAI provider with custom configuration.
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
        std::env::var("OPENAI_API_KEY").map_err(|_| {
            BibcheckError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| BibcheckError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
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
        });

        if request.enable_grounded_search {
            body["web_search_options"] = json!({});
        } else {
            body["temperature"] = json!(request.temperature);
        }

        body
    }
}

impl LlmProvider for OpenAIProvider {
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
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: OpenAIResponse = response
            .json()
            .map_err(|e| BibcheckError::Api(format!("Failed to parse API response: {}", e)))?;

        // Extract text from response
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(BibcheckError::EmptyResponse)
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// OpenAI API response structure.
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAIProvider {
        OpenAIProvider {
            client: Client::new(),
            api_key: "test".to_string(),
            config: LlmConfig::with_model("gpt-4o-search-preview"),
        }
    }

    #[test]
    fn test_grounded_request_omits_temperature() {
        let request = GenerationRequest {
            task_text: "Verify".to_string(),
            system_instruction: "System".to_string(),
            enable_grounded_search: true,
            temperature: 0.1,
        };
        let body = provider().request_body(&request);

        assert_eq!(body["model"], "gpt-4o-search-preview");
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(body.get("web_search_options").is_some());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_plain_request_keeps_temperature() {
        let request = GenerationRequest {
            task_text: "Verify".to_string(),
            system_instruction: "System".to_string(),
            enable_grounded_search: false,
            temperature: 0.1,
        };
        let body = provider().request_body(&request);

        assert_eq!(body["temperature"], 0.1);
        assert!(body.get("web_search_options").is_none());
    }

    #[test]
    fn test_parse_response() {
        let response: OpenAIResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"status\": \"INVALID\"}"}}]}"#,
        )
        .unwrap();
        let content = response.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content.as_deref(), Some(r#"{"status": "INVALID"}"#));
    }
}
