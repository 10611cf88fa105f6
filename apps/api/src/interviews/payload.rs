//! Request decoding for the generation endpoint.
//!
//! The endpoint serves two callers: the voice-agent framework POSTs a
//! tool-call envelope, and direct API callers POST the argument bag itself.
//! The envelope is recognized by its `"tool-calls"` message type; anything
//! else decodes as the direct shape and stands or falls on validation.

use serde::Deserialize;

use crate::errors::AppError;

/// Fixed message for the 400 response. Names the full field list without
/// revealing which one failed.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "role, type, level, techstack, amount, userid are required.";

/// Question count used when the caller does not supply one.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GeneratePayload {
    ToolCall(ToolCallEnvelope),
    Direct(InterviewArgs),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallEnvelope {
    pub message: ToolCallMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallMessage {
    /// Single-variant discriminant: a message of any other type fails this
    /// decode and falls through to the direct shape.
    #[serde(rename = "type")]
    pub kind: ToolCallsTag,
    #[serde(default, rename = "toolCallList")]
    pub tool_call_list: Vec<ToolCall>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum ToolCallsTag {
    #[serde(rename = "tool-calls")]
    ToolCalls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    /// May be absent; the acknowledgment then omits `toolCallId`.
    pub id: Option<String>,
    pub function: Option<ToolFunction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolFunction {
    pub arguments: Option<InterviewArgs>,
}

/// The argument bag. Everything is optional at the decode layer;
/// requiredness is a validation rule (fixed 400), not a decode rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewArgs {
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub level: Option<String>,
    pub techstack: Option<String>,
    pub amount: Option<Amount>,
    pub userid: Option<String>,
}

/// Tool-call frameworks serialize numeric arguments as numbers or strings
/// interchangeably. Any JSON number is accepted, not just integers, and is
/// rendered into the prompt as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Count(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Count(n) => write!(f, "{n}"),
            Amount::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A generation request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub role: String,
    pub interview_type: String,
    pub level: String,
    pub user_id: String,
    pub techstack: Vec<String>,
    pub amount: Option<Amount>,
}

/// Splits the effective argument bag out of either payload shape, along
/// with the tool-call id when one exists. Nothing here errors: an id-less
/// call keeps its arguments, and an empty or argument-less call list
/// yields the default bag, which validation then rejects.
pub fn resolve_payload(payload: GeneratePayload) -> (Option<String>, InterviewArgs) {
    match payload {
        GeneratePayload::ToolCall(envelope) => {
            match envelope.message.tool_call_list.into_iter().next() {
                Some(call) => {
                    let args = call.function.and_then(|f| f.arguments).unwrap_or_default();
                    (call.id, args)
                }
                None => (None, InterviewArgs::default()),
            }
        }
        GeneratePayload::Direct(args) => (None, args),
    }
}

/// Checks the four required fields (blank counts as missing) and normalizes
/// the rest.
pub fn validate_args(args: InterviewArgs) -> Result<ValidatedRequest, AppError> {
    let role = required(args.role)?;
    let interview_type = required(args.interview_type)?;
    let level = required(args.level)?;
    let user_id = required(args.userid)?;

    Ok(ValidatedRequest {
        role,
        interview_type,
        level,
        user_id,
        techstack: split_techstack(args.techstack.as_deref()),
        amount: args.amount,
    })
}

fn required(field: Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

/// Comma-splits a techstack string into trimmed, non-empty entries.
/// Absent input is an empty list, not an error.
pub fn split_techstack(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
