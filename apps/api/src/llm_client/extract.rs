//! Structured-output extraction: recovering a JSON value from a model's
//! free-text response.
//!
//! The prompts instruct the model to emit strict JSON with no commentary.
//! The one wrapper this module tolerates is the common markdown code fence
//! around the payload; anything else that fails to parse is an extraction
//! failure carrying the untouched original text for diagnostics.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Extraction failure. `raw` is the model's original response text,
/// byte-for-byte, so callers can log or return it for diagnosis.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ExtractError {
    pub raw: String,
    pub reason: String,
}

/// Parses a model response as JSON after stripping code-fence wrappers.
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    let cleaned = strip_json_fences(raw);
    serde_json::from_str(cleaned).map_err(|e| ExtractError {
        raw: raw.to_string(),
        reason: format!("model did not return valid JSON: {e}"),
    })
}

/// Parses a model response as JSON and decodes it into `T`. A response that
/// parses but has the wrong shape (an object where an array of strings is
/// required, say) is an extraction failure, not a success.
pub fn extract_json_as<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let value = extract_json(raw)?;
    serde_json::from_value(value).map_err(|e| ExtractError {
        raw: raw.to_string(),
        reason: format!("model returned JSON of the wrong shape: {e}"),
    })
}

/// Strips a leading "```json" marker (any letter case) and a single trailing
/// "```" marker. The two strips are independent; either may appear alone.
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let body = strip_prefix_ignore_case(trimmed, "```json")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// ASCII-case-insensitive `strip_prefix`. Safe to slice after the match
/// because the matched bytes are ASCII.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.as_bytes().get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
