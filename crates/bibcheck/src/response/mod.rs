//! Turning free-form model output into a typed verdict.
//!
//! The model is asked for a single raw JSON object but routinely wraps it
//! in code fences, surrounds it with prose, or emits LaTeX backslashes
//! unescaped. Parsing goes: extract → strict parse → repair → strict parse
//! → field-by-field normalization.

mod extract;
mod normalize;
pub mod repair;

use serde_json::{Map, Value};

pub use extract::extract_json;
pub use normalize::{ModelVerdict, DEFAULT_DETAILS};
pub use repair::repair;

/// Maximum number of characters of raw output quoted in failure details.
pub const RAW_EXCERPT_CHARS: usize = 200;

/// A response that could not be parsed even after repair.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    /// The raw model output.
    pub raw: String,
    /// Why the repaired text still failed to parse.
    pub reason: String,
}

impl ParseFailure {
    /// Details text for the resulting `UNCERTAIN` verdict.
    pub fn details(&self) -> String {
        let excerpt: String = self.raw.chars().take(RAW_EXCERPT_CHARS).collect();
        format!("Could not parse AI analysis. Raw output: {}...", excerpt)
    }
}

/// Parse a raw model response into a verdict, repairing it if needed.
pub fn parse_response(raw: &str) -> Result<ModelVerdict, ParseFailure> {
    let candidate = extract_json(raw);

    let object = match parse_object(candidate) {
        Ok(object) => object,
        Err(first_error) => {
            tracing::warn!(error = %first_error, "initial JSON parse failed, attempting repair");

            let repaired = repair(candidate);
            parse_object(&repaired).map_err(|reason| ParseFailure {
                raw: raw.to_string(),
                reason,
            })?
        }
    };

    Ok(ModelVerdict::from_object(&object))
}

/// Strictly parse `text` as a single JSON object.
fn parse_object(text: &str) -> Result<Map<String, Value>, String> {
    if text.trim().is_empty() {
        return Err("empty JSON string".to_string());
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(format!("expected a JSON object, found {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ValidationStatus;

    #[test]
    fn test_clean_response() {
        let verdict = parse_response(r#"{"status":"VALID","details":"ok"}"#).unwrap();
        assert_eq!(verdict.status, ValidationStatus::Valid);
        assert_eq!(verdict.details, "ok");
    }

    #[test]
    fn test_fenced_response_with_latex() {
        let raw = "```json\n{\"status\": \"VALID\", \"details\": \"Listed as \\bibitem{shor}\",}\n```";
        let verdict = parse_response(raw).unwrap();

        assert_eq!(verdict.status, ValidationStatus::Valid);
        assert_eq!(verdict.details, "Listed as \\bibitem{shor}");
    }

    #[test]
    fn test_unparseable_response() {
        let failure = parse_response("I'm sorry, I cannot browse the web.").unwrap_err();
        assert!(failure
            .details()
            .starts_with("Could not parse AI analysis. Raw output: I'm sorry"));
        assert!(failure.details().ends_with("..."));
    }

    #[test]
    fn test_empty_response() {
        let failure = parse_response("").unwrap_err();
        assert_eq!(failure.reason, "empty JSON string");
        assert_eq!(failure.details(), "Could not parse AI analysis. Raw output: ...");
    }

    #[test]
    fn test_array_is_not_a_verdict() {
        let failure = parse_response(r#"["VALID", "INVALID"]"#).unwrap_err();
        assert_eq!(failure.reason, "expected a JSON object, found an array");
    }

    #[test]
    fn test_excerpt_truncated() {
        let raw = format!("{{{}", "x".repeat(500));
        let details = parse_response(&raw).unwrap_err().details();
        let excerpt = details
            .trim_start_matches("Could not parse AI analysis. Raw output: ")
            .trim_end_matches("...");
        assert_eq!(excerpt.chars().count(), RAW_EXCERPT_CHARS);
    }
}
