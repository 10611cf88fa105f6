//! In-memory store used by tests. Mirrors the Postgres implementation's
//! observable semantics: ordering, limits, and replace-on-upsert.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::feedback::{FeedbackRow, NewFeedback};
use crate::models::interview::{InterviewRow, NewInterview};
use crate::store::InterviewStore;

#[derive(Default)]
pub struct MemoryStore {
    interviews: Mutex<Vec<InterviewRow>>,
    feedback: Mutex<Vec<FeedbackRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully-specified interview row, bypassing store-assigned
    /// fields so tests can control ids and timestamps.
    pub fn seed_interview(&self, row: InterviewRow) {
        self.interviews.lock().unwrap().push(row);
    }

    pub fn interview_count(&self) -> usize {
        self.interviews.lock().unwrap().len()
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback.lock().unwrap().len()
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn add_interview(&self, new: NewInterview) -> Result<InterviewRow> {
        let row = InterviewRow {
            id: Uuid::new_v4(),
            role: new.role,
            interview_type: new.interview_type,
            level: new.level,
            techstack: new.techstack,
            questions: new.questions,
            user_id: new.user_id,
            finalized: new.finalized,
            cover_image: new.cover_image,
            created_at: Utc::now(),
        };
        self.interviews.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>> {
        let mut rows: Vec<_> = self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn latest_interviews(&self, user_id: &str, limit: i64) -> Result<Vec<InterviewRow>> {
        let mut rows: Vec<_> = self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.finalized && r.user_id != user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn interview_by_id(&self, id: Uuid) -> Result<Option<InterviewRow>> {
        Ok(self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn upsert_feedback(&self, id: Uuid, new: NewFeedback) -> Result<FeedbackRow> {
        let row = FeedbackRow {
            id,
            interview_id: new.interview_id,
            user_id: new.user_id,
            total_score: new.total_score,
            category_scores: Json(new.category_scores),
            strengths: new.strengths,
            areas_for_improvement: new.areas_for_improvement,
            final_assessment: new.final_assessment,
            created_at: Utc::now(),
        };
        let mut feedback = self.feedback.lock().unwrap();
        if let Some(existing) = feedback.iter_mut().find(|r| r.id == id) {
            *existing = row.clone();
        } else {
            feedback.push(row.clone());
        }
        Ok(row)
    }

    async fn feedback_for_interview(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<FeedbackRow>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.interview_id == interview_id && r.user_id == user_id)
            .cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::CategoryScores;
    use chrono::Duration;

    fn sample_interview(user_id: &str, finalized: bool, age_minutes: i64) -> InterviewRow {
        InterviewRow {
            id: Uuid::new_v4(),
            role: "Backend Engineer".to_string(),
            interview_type: "technical".to_string(),
            level: "mid".to_string(),
            techstack: vec!["Rust".to_string(), "Postgres".to_string()],
            questions: vec!["Explain ownership.".to_string()],
            user_id: user_id.to_string(),
            finalized,
            cover_image: "/covers/adobe.png".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    fn sample_feedback(interview_id: Uuid, user_id: &str) -> NewFeedback {
        NewFeedback {
            interview_id,
            user_id: user_id.to_string(),
            total_score: 72.0,
            category_scores: CategoryScores {
                communication: 70.0,
                technical: 80.0,
                problem_solving: 75.0,
                culture_fit: 65.0,
                confidence: 70.0,
            },
            strengths: vec!["clear explanations".to_string()],
            areas_for_improvement: vec!["edge cases".to_string()],
            final_assessment: "Solid mid-level showing.".to_string(),
        }
    }

    #[tokio::test]
    async fn discovery_feed_excludes_caller_and_drafts() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.seed_interview(sample_interview("u2", true, i));
        }
        for i in 0..3 {
            store.seed_interview(sample_interview("u1", true, 10 + i));
        }
        for i in 0..2 {
            store.seed_interview(sample_interview("u1", false, 20 + i));
        }

        let feed = store.latest_interviews("u1", 20).await.unwrap();

        assert_eq!(feed.len(), 5);
        assert!(feed.iter().all(|r| r.user_id == "u2" && r.finalized));
        for pair in feed.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn discovery_feed_respects_limit() {
        let store = MemoryStore::new();
        for i in 0..8 {
            store.seed_interview(sample_interview("u2", true, i));
        }

        let feed = store.latest_interviews("u1", 3).await.unwrap();
        assert_eq!(feed.len(), 3);
        // The newest three survive the cut
        assert!(feed[0].created_at >= feed[2].created_at);
    }

    #[tokio::test]
    async fn by_user_listing_is_newest_first() {
        let store = MemoryStore::new();
        store.seed_interview(sample_interview("u1", true, 30));
        store.seed_interview(sample_interview("u1", true, 5));
        store.seed_interview(sample_interview("u2", true, 1));

        let rows = store.interviews_for_user("u1").await.unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].created_at > rows[1].created_at);
    }

    #[tokio::test]
    async fn point_lookup_misses_return_none() {
        let store = MemoryStore::new();
        assert!(store.interview_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_with_same_id_replaces() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        let interview_id = Uuid::new_v4();

        store.upsert_feedback(id, sample_feedback(interview_id, "u1")).await.unwrap();
        let mut second = sample_feedback(interview_id, "u1");
        second.total_score = 90.0;
        store.upsert_feedback(id, second).await.unwrap();

        assert_eq!(store.feedback_count(), 1);
        let row = store
            .feedback_for_interview(interview_id, "u1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.total_score, 90.0);
    }

    #[tokio::test]
    async fn upsert_with_distinct_ids_accumulates() {
        let store = MemoryStore::new();
        let interview_id = Uuid::new_v4();

        store
            .upsert_feedback(Uuid::new_v4(), sample_feedback(interview_id, "u1"))
            .await
            .unwrap();
        store
            .upsert_feedback(Uuid::new_v4(), sample_feedback(interview_id, "u1"))
            .await
            .unwrap();

        assert_eq!(store.feedback_count(), 2);
    }

    #[tokio::test]
    async fn feedback_lookup_matches_both_keys() {
        let store = MemoryStore::new();
        let interview_id = Uuid::new_v4();
        store
            .upsert_feedback(Uuid::new_v4(), sample_feedback(interview_id, "u1"))
            .await
            .unwrap();

        assert!(store
            .feedback_for_interview(interview_id, "u1")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .feedback_for_interview(interview_id, "u2")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .feedback_for_interview(Uuid::new_v4(), "u1")
            .await
            .unwrap()
            .is_none());
    }
}
