//! Axum route handlers for the interview API: the generation webhook and
//! the read accessors the front-end pages consume.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interviews::generator::generate_interview;
use crate::interviews::payload::{resolve_payload, validate_args, GeneratePayload};
use crate::models::interview::InterviewRow;
use crate::state::AppState;

/// Confirmation string the voice agent reads back to the user.
const GENERATION_CONFIRMATION: &str =
    "Your interview has been successfully generated. You can now access it on the website.";

/// Default page size for the discovery feed.
const DEFAULT_FEED_LIMIT: i64 = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Acknowledgment envelope for the generation webhook. The voice-agent
/// framework expects `results[].toolCallId/result`; direct callers get the
/// same shape without the call id.
#[derive(Debug, Serialize)]
pub struct GenerateAck {
    pub results: Vec<ToolCallResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/vapi/generate
///
/// Fixed acknowledgment for the webhook configuration screen.
pub async fn handle_generate_ack() -> Json<Value> {
    Json(json!({ "success": true, "data": "THANK YOU!" }))
}

/// POST /api/vapi/generate
///
/// Accepts the tool-call envelope or the direct argument bag, generates
/// questions, persists the interview, and answers with the webhook
/// acknowledgment. 400 on missing required fields, 500 on model, parse,
/// or store failure.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePayload>,
) -> Result<Json<GenerateAck>, AppError> {
    let (tool_call_id, args) = resolve_payload(payload);
    let request = validate_args(args)?;

    generate_interview(state.store.as_ref(), &state.llm, request).await?;

    Ok(Json(GenerateAck {
        results: vec![ToolCallResult {
            tool_call_id,
            result: GENERATION_CONFIRMATION.to_string(),
        }],
    }))
}

/// GET /api/v1/interviews?user_id=
///
/// All interviews for a user, newest first. A missing user id yields an
/// empty list, not an error.
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let Some(user_id) = params.user_id.filter(|u| !u.trim().is_empty()) else {
        return Ok(Json(vec![]));
    };

    let rows = state
        .store
        .interviews_for_user(&user_id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows))
}

/// GET /api/v1/interviews/latest?user_id=&limit=
///
/// The discovery feed: other users' finalized interviews, newest first.
pub async fn handle_latest_interviews(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let Some(user_id) = params.user_id.filter(|u| !u.trim().is_empty()) else {
        return Ok(Json(vec![]));
    };
    let limit = params.limit.unwrap_or(DEFAULT_FEED_LIMIT).max(0);

    let rows = state
        .store
        .latest_interviews(&user_id, limit)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows))
}

/// GET /api/v1/interviews/:id
///
/// Point read of a single interview.
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewRow>, AppError> {
    let row = state
        .store
        .interview_by_id(id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(row))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
