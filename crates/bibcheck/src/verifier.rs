//! Single-reference verification.

use std::sync::Arc;

use crate::llm::{verification_prompt, GenerationRequest, LlmProvider, SYSTEM_INSTRUCTION};
use crate::reference::ReferenceResult;
use crate::response::parse_response;

/// Details for a reference whose provider call failed.
pub const TECHNICAL_FAILURE_DETAILS: &str = "Verification failed due to technical error.";

/// Verifies one reference at a time against an LLM provider.
///
/// `verify` is total: every failure path ends in an `UNCERTAIN` result,
/// and nothing is retried.
#[derive(Clone)]
pub struct Verifier {
    provider: Arc<dyn LlmProvider>,
}

impl Verifier {
    /// Create a verifier backed by `provider`.
    pub fn new(provider: impl LlmProvider + 'static) -> Self {
        Self::from_shared(Arc::new(provider))
    }

    /// Create a verifier sharing an existing provider.
    pub fn from_shared(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// The provider this verifier calls.
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Build the provider request for `reference`.
    pub fn request_for(&self, reference: &str) -> GenerationRequest {
        let config = self.provider.config();
        GenerationRequest {
            task_text: verification_prompt(reference),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            enable_grounded_search: config.grounded_search,
            temperature: config.temperature,
        }
    }

    /// Verify `reference`, tagging the result with `id`.
    pub fn verify(&self, reference: &str, id: &str) -> ReferenceResult {
        let request = self.request_for(reference);

        let raw = match self.provider.generate(&request) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    provider = self.provider.name(),
                    reference_id = id,
                    error = %e,
                    "model call failed"
                );
                return ReferenceResult::uncertain(id, reference, TECHNICAL_FAILURE_DETAILS);
            }
        };

        match parse_response(&raw) {
            Ok(verdict) => {
                tracing::debug!(reference_id = id, status = %verdict.status, "reference verified");
                verdict.into_result(id, reference)
            }
            Err(failure) => {
                tracing::error!(
                    reference_id = id,
                    reason = %failure.reason,
                    "repaired JSON parse failed"
                );
                ReferenceResult::uncertain(id, reference, failure.details())
            }
        }
    }
}
