//! Locating the JSON payload inside a free-form model response.

use once_cell::sync::Lazy;
use regex::Regex;

/// A fenced block explicitly tagged as JSON.
static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

/// Any fenced block.
static ANY_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());

/// Pull the most likely JSON text out of a model response.
///
/// Tries, in order: a ```` ```json ```` fence, any fence, the span from the
/// first `{` to the last `}`, and finally the raw text unchanged.
pub fn extract_json(raw: &str) -> &str {
    let fenced = JSON_FENCE
        .captures(raw)
        .or_else(|| ANY_FENCE.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|body| !body.is_empty());

    if let Some(body) = fenced {
        return body;
    }

    // A `}` that only appears before the first `{` yields the raw text, not a reversed span.
    match (raw.find('{'), raw.rfind('}')) {
        (Some(open), Some(close)) if open < close => &raw[open..=close],
        _ => raw,
    }
}
