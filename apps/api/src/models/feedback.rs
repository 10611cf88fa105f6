use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-category rubric scores. The category set is fixed by the scoring
/// prompt; the model may neither add nor drop categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub communication: f64,
    pub technical: f64,
    pub problem_solving: f64,
    pub culture_fit: f64,
    pub confidence: f64,
}

/// A stored feedback record for one (interview, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub user_id: String,
    pub total_score: f64,
    pub category_scores: Json<CategoryScores>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a feedback write. The record id is resolved by the caller
/// (reuse for overwrite, fresh otherwise); `created_at` is assigned on write.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub interview_id: Uuid,
    pub user_id: String,
    pub total_score: f64,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
}
