// Persistence boundary for interviews and feedback.
// One trait covering the document operations the handlers need: auto-id
// insert, keyed upsert, point reads, and the filtered list queries.
// Production uses Postgres; tests use the in-memory implementation.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::feedback::{FeedbackRow, NewFeedback};
use crate::models::interview::{InterviewRow, NewInterview};

pub mod postgres;

#[cfg(test)]
pub mod memory;

/// The store trait. Carried in `AppState` as `Arc<dyn InterviewStore>`.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Inserts a new interview; the store assigns id and created_at.
    async fn add_interview(&self, new: NewInterview) -> Result<InterviewRow>;

    /// All interviews belonging to `user_id`, newest first, unbounded.
    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>>;

    /// The discovery feed: finalized interviews belonging to anyone but
    /// `user_id`, newest first, at most `limit` rows.
    async fn latest_interviews(&self, user_id: &str, limit: i64) -> Result<Vec<InterviewRow>>;

    /// Point lookup; `None` when the id is unknown.
    async fn interview_by_id(&self, id: Uuid) -> Result<Option<InterviewRow>>;

    /// Writes feedback at `id`, replacing any existing record wholesale.
    async fn upsert_feedback(&self, id: Uuid, new: NewFeedback) -> Result<FeedbackRow>;

    /// The feedback for one (interview, user) pair, if any. Duplicates can
    /// exist (uniqueness is not enforced); an arbitrary one wins.
    async fn feedback_for_interview(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<FeedbackRow>>;
}
