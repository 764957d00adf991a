//! Mock LLM provider for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::json;

use crate::error::{BibcheckError, Result};

use super::provider::{GenerationRequest, LlmConfig, LlmProvider};

/// A scripted reply.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// Mock LLM provider that returns predictable responses for testing.
///
/// Queued replies are served first, in order. Once the queue is empty the
/// fallback reply is used; without one, the provider answers `VALID` for
/// references that carry a DOI and `UNCERTAIN` otherwise.
pub struct MockProvider {
    config: LlmConfig,
    queue: Mutex<VecDeque<MockReply>>,
    fallback: Option<MockReply>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::with_model("mock"),
            queue: Mutex::new(VecDeque::new()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Always answer with `text`.
    pub fn with_response(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(MockReply::Text(text.into()));
        self
    }

    /// Always fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fallback: Some(MockReply::Failure(message.into())),
            ..Self::new()
        }
    }

    /// Answer the next unanswered request with `text`.
    pub fn then_respond(self, text: impl Into<String>) -> Self {
        self.push(MockReply::Text(text.into()));
        self
    }

    /// Fail the next unanswered request.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Failure(message.into()));
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn push(&self, reply: MockReply) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(reply);
        }
    }

    fn next_reply(&self, request: &GenerationRequest) -> MockReply {
        let queued = self.queue.lock().ok().and_then(|mut queue| queue.pop_front());

        queued
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| MockReply::Text(default_verdict(&request.task_text)))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.next_reply(request) {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => Err(BibcheckError::Api(message)),
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn default_verdict(task_text: &str) -> String {
    let verdict = if task_text.to_lowercase().contains("doi") {
        json!({
            "status": "VALID",
            "details": "Mock provider: reference carries a DOI.",
            "alternatives": []
        })
    } else {
        json!({
            "status": "UNCERTAIN",
            "details": "Mock provider: no web search performed.",
            "alternatives": []
        })
    };
    verdict.to_string()
}
