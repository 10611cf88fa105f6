//! Feedback generation — scores a finished interview transcript against a
//! fixed five-category rubric.
//!
//! Flow: format transcript → build rubric prompt → single LLM call →
//!       extract JSON object → upsert.
//!
//! This pipeline is deliberately tolerant: the caller receives a uniform
//! success marker and never an error payload. Causes are logged here and
//! nowhere else — the call site shows "feedback unavailable" either way.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::feedback::prompts::{FEEDBACK_PREAMBLE, FEEDBACK_PROMPT_TEMPLATE};
use crate::llm_client::extract::extract_json_as;
use crate::llm_client::LlmClient;
use crate::models::feedback::{CategoryScores, NewFeedback};
use crate::store::InterviewStore;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// One turn of the interview conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: String,
    pub content: String,
}

/// Request body for feedback generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub interview_id: Uuid,
    pub user_id: String,
    pub transcript: Vec<TranscriptTurn>,
    /// Overwrites the record at this id when supplied. Omitting it creates
    /// a fresh record on every call — this is the only dedup mechanism.
    pub feedback_id: Option<Uuid>,
}

/// Uniform outcome marker. `feedback_id` is present exactly when `success`
/// is true.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<Uuid>,
}

impl FeedbackAck {
    fn failure() -> Self {
        Self {
            success: false,
            feedback_id: None,
        }
    }
}

/// What the model must return. Matches the JSON schema embedded in the
/// rubric prompt; a response missing any field is an extraction failure and
/// nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvaluation {
    pub total_score: f64,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Formats the conversation as the newline-joined "- role: content" block
/// the rubric prompt embeds.
pub fn format_transcript(transcript: &[TranscriptTurn]) -> String {
    transcript
        .iter()
        .map(|turn| format!("- {}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_feedback_prompt(transcript: &[TranscriptTurn]) -> String {
    let rubric = FEEDBACK_PROMPT_TEMPLATE.replace("{transcript}", &format_transcript(transcript));
    format!("{FEEDBACK_PREAMBLE}\n\n{rubric}")
}

/// Runs the feedback pipeline. Never fails outward: every failure is logged
/// and collapsed into `success: false`.
pub async fn generate_feedback(
    store: &dyn InterviewStore,
    llm: &LlmClient,
    request: FeedbackRequest,
) -> FeedbackAck {
    let prompt = build_feedback_prompt(&request.transcript);

    let text = match llm.call(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Feedback model call failed: {e}");
            return FeedbackAck::failure();
        }
    };

    let evaluation: FeedbackEvaluation = match extract_json_as(&text) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            error!("Invalid JSON from model: {}", e.raw);
            return FeedbackAck::failure();
        }
    };

    let feedback_id = request.feedback_id.unwrap_or_else(Uuid::new_v4);
    let record = NewFeedback {
        interview_id: request.interview_id,
        user_id: request.user_id,
        total_score: evaluation.total_score,
        category_scores: evaluation.category_scores,
        strengths: evaluation.strengths,
        areas_for_improvement: evaluation.areas_for_improvement,
        final_assessment: evaluation.final_assessment,
    };

    match store.upsert_feedback(feedback_id, record).await {
        Ok(row) => {
            info!(
                "Saved feedback {} for interview {} (total score {})",
                row.id, row.interview_id, row.total_score
            );
            FeedbackAck {
                success: true,
                feedback_id: Some(row.id),
            }
        }
        Err(e) => {
            error!("Feedback write failed: {e}");
            FeedbackAck::failure()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
