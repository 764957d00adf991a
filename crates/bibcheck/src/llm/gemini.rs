//! Google Gemini API provider implementation.
//!
//! Gemini is the default provider because its `google_search` tool grounds
//! the verdict in live search results.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{BibcheckError, Result};

use super::provider::{GenerationRequest, LlmConfig, LlmProvider};

/// Gemini API base URL; the model and method are appended.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl GeminiProvider {
    /// Model used by [`GeminiProvider::new`] and [`LlmConfig::default`].
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    /// Create a new Gemini provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::default())
    }

    /// Create a new Gemini provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(BibcheckError::Config("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| BibcheckError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(LlmConfig::default())
    }

    /// Create from the `GEMINI_API_KEY` environment variable with custom configuration.
    pub fn from_env_with_config(config: LlmConfig) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            BibcheckError::Config("GEMINI_API_KEY environment variable not set".to_string())
        })?;
        Self::with_config(api_key, config)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.config.model)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| BibcheckError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        let mut body = json!({
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.task_text }]
                }
            ],
            "generationConfig": {
                "temperature": request.temperature,
                "maxOutputTokens": self.config.max_tokens
            }
        });

        if request.enable_grounded_search {
            body["tools"] = json!([{ "google_search": {} }]);
        }

        body
    }
}

impl LlmProvider for GeminiProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .headers(self.build_headers()?)
            .json(&self.request_body(request))
            .send()
            .map_err(|e| BibcheckError::Api(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(BibcheckError::Api(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let api_response: GeminiResponse = response
            .json()
            .map_err(|e| BibcheckError::Api(format!("Failed to parse Gemini response: {}", e)))?;

        api_response.into_text()
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini `generateContent` response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GeminiResponse {
    /// Concatenate the text parts of the first candidate.
    fn into_text(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(BibcheckError::Api(format!("Gemini blocked the prompt: {}", reason)));
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(BibcheckError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider {
            client: Client::new(),
            api_key: "test".to_string(),
            config: LlmConfig::default(),
        }
    }

    fn request(grounded: bool) -> GenerationRequest {
        GenerationRequest {
            task_text: "Verify this".to_string(),
            system_instruction: "Be precise".to_string(),
            enable_grounded_search: grounded,
            temperature: 0.1,
        }
    }

    #[test]
    fn test_request_body_with_search() {
        let body = provider().request_body(&request(true));

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be precise");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Verify this");
        assert_eq!(body["generationConfig"]["temperature"], 0.1);
        assert!(body["tools"][0].get("google_search").is_some());
    }

    #[test]
    fn test_request_body_without_search() {
        let body = provider().request_body(&request(false));
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_endpoint_uses_model() {
        assert!(provider()
            .endpoint()
            .ends_with("/gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"status\": "}, {"text": "\"VALID\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), r#"{"status": "VALID"}"#);
    }

    #[test]
    fn test_empty_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(response.into_text(), Err(BibcheckError::EmptyResponse)));
    }

    #[test]
    fn test_blocked_prompt() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(matches!(response.into_text(), Err(BibcheckError::Api(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            GeminiProvider::new("  "),
            Err(BibcheckError::Config(_))
        ));
    }
}
