//! Verification outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Details shown for a reference that has not been verified yet.
pub const PENDING_DETAILS: &str = "Waiting for verification...";

/// Verification status of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    /// Not verified yet.
    Pending,
    /// An exact or near-exact match was found.
    Valid,
    /// The reference does not exist or its title/author combination is wrong.
    Invalid,
    /// Existence could be neither proven nor disproven.
    Uncertain,
}

impl ValidationStatus {
    /// Parse one of the three terminal labels a model may return.
    ///
    /// Matching is exact: `"valid"`, `"Pending"` or `"MAYBE"` are rejected.
    pub fn from_model_label(label: &str) -> Option<Self> {
        match label {
            "VALID" => Some(ValidationStatus::Valid),
            "INVALID" => Some(ValidationStatus::Invalid),
            "UNCERTAIN" => Some(ValidationStatus::Uncertain),
            _ => None,
        }
    }

    /// The upper-case wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "PENDING",
            ValidationStatus::Valid => "VALID",
            ValidationStatus::Invalid => "INVALID",
            ValidationStatus::Uncertain => "UNCERTAIN",
        }
    }

    /// Whether no further automatic transition happens from this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ValidationStatus::Pending)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceResult {
    /// Identifier, unique within a run.
    pub id: String,

    /// The segmented input string, exactly as produced by the segmenter.
    pub original_text: String,

    /// Current status.
    pub status: ValidationStatus,

    /// Official form of the citation, only for `VALID` results that differ
    /// from the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_citation: Option<String>,

    /// Human-readable justification.
    pub details: String,

    /// Real citations on the same topic, only for `INVALID` results.
    #[serde(default)]
    pub alternatives: Vec<String>,

    /// Evidence URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ReferenceResult {
    /// Create a result that is still waiting for verification.
    pub fn pending(id: impl Into<String>, original_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            original_text: original_text.into(),
            status: ValidationStatus::Pending,
            corrected_citation: None,
            details: PENDING_DETAILS.to_string(),
            alternatives: Vec::new(),
            source_url: None,
        }
    }

    /// Create a terminal `UNCERTAIN` result carrying only an explanation.
    pub fn uncertain(
        id: impl Into<String>,
        original_text: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            original_text: original_text.into(),
            status: ValidationStatus::Uncertain,
            corrected_citation: None,
            details: details.into(),
            alternatives: Vec::new(),
            source_url: None,
        }
    }

    /// Create a terminal result.
    ///
    /// `PENDING` is coerced to `UNCERTAIN`. Alternatives are dropped unless
    /// the status is `INVALID`, and the corrected citation is dropped unless
    /// the status is `VALID` and it differs from the input once whitespace
    /// is collapsed.
    pub fn resolve(
        id: impl Into<String>,
        original_text: impl Into<String>,
        status: ValidationStatus,
        details: impl Into<String>,
        corrected_citation: Option<String>,
        alternatives: Vec<String>,
        source_url: Option<String>,
    ) -> Self {
        let original_text = original_text.into();
        let status = match status {
            ValidationStatus::Pending => ValidationStatus::Uncertain,
            other => other,
        };

        let corrected_citation = corrected_citation.filter(|citation| {
            status == ValidationStatus::Valid
                && collapse_whitespace(citation) != collapse_whitespace(&original_text)
        });

        let alternatives = if status == ValidationStatus::Invalid {
            alternatives
        } else {
            Vec::new()
        };

        Self {
            id: id.into(),
            original_text,
            status,
            corrected_citation,
            details: details.into(),
            alternatives,
            source_url,
        }
    }

    /// Whether this reference still awaits verification.
    pub fn is_pending(&self) -> bool {
        self.status == ValidationStatus::Pending
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
