//! Coercing a parsed model object into a typed verdict.

use serde_json::{Map, Value};

use crate::reference::{ReferenceResult, ValidationStatus};

/// Details used when the model gave no justification.
pub const DEFAULT_DETAILS: &str = "Analysis complete.";

/// What the model claimed about one reference, after field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelVerdict {
    pub status: ValidationStatus,
    pub corrected_citation: Option<String>,
    pub details: String,
    pub alternatives: Vec<String>,
    pub source_url: Option<String>,
}

impl ModelVerdict {
    /// Validate each field of a parsed response object.
    ///
    /// Unknown or malformed fields are defaulted, never rejected:
    /// an unrecognised status becomes `UNCERTAIN`, a non-array
    /// `alternatives` becomes empty, a non-string `sourceUrl` is dropped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let status = object
            .get("status")
            .and_then(Value::as_str)
            .and_then(ValidationStatus::from_model_label)
            .unwrap_or(ValidationStatus::Uncertain);

        let corrected_citation = non_empty_string(object.get("correctedCitation"));

        let details = non_empty_string(object.get("details"))
            .unwrap_or_else(|| DEFAULT_DETAILS.to_string());

        let alternatives = match object.get("alternatives") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        let source_url = object
            .get("sourceUrl")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status,
            corrected_citation,
            details,
            alternatives,
            source_url,
        }
    }

    /// Attach the verdict to the reference it was produced for.
    pub fn into_result(self, id: &str, original_text: &str) -> ReferenceResult {
        ReferenceResult::resolve(
            id,
            original_text,
            self.status,
            self.details,
            self.corrected_citation,
            self.alternatives,
            self.source_url,
        )
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
