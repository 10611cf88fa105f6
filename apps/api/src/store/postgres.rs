use anyhow::Result;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::feedback::{FeedbackRow, NewFeedback};
use crate::models::interview::{InterviewRow, NewInterview};
use crate::store::InterviewStore;

/// Postgres-backed store. Every operation is a single statement; nothing in
/// the product needs cross-row atomicity, so there are no transactions.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgStore {
    async fn add_interview(&self, new: NewInterview) -> Result<InterviewRow> {
        let row = sqlx::query_as::<_, InterviewRow>(
            r#"
            INSERT INTO interviews
                (role, interview_type, level, techstack, questions,
                 user_id, finalized, cover_image)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.role)
        .bind(&new.interview_type)
        .bind(&new.level)
        .bind(&new.techstack)
        .bind(&new.questions)
        .bind(&new.user_id)
        .bind(new.finalized)
        .bind(&new.cover_image)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewRow>> {
        let rows = sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn latest_interviews(&self, user_id: &str, limit: i64) -> Result<Vec<InterviewRow>> {
        let rows = sqlx::query_as::<_, InterviewRow>(
            r#"
            SELECT * FROM interviews
            WHERE finalized = TRUE AND user_id <> $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn interview_by_id(&self, id: Uuid) -> Result<Option<InterviewRow>> {
        let row = sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn upsert_feedback(&self, id: Uuid, new: NewFeedback) -> Result<FeedbackRow> {
        // Whole-record replace: a re-run with the same id leaves exactly one
        // record carrying the fresh values, timestamp included.
        let row = sqlx::query_as::<_, FeedbackRow>(
            r#"
            INSERT INTO feedback
                (id, interview_id, user_id, total_score, category_scores,
                 strengths, areas_for_improvement, final_assessment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
            ON CONFLICT (id) DO UPDATE SET
                interview_id = EXCLUDED.interview_id,
                user_id = EXCLUDED.user_id,
                total_score = EXCLUDED.total_score,
                category_scores = EXCLUDED.category_scores,
                strengths = EXCLUDED.strengths,
                areas_for_improvement = EXCLUDED.areas_for_improvement,
                final_assessment = EXCLUDED.final_assessment,
                created_at = EXCLUDED.created_at
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.interview_id)
        .bind(&new.user_id)
        .bind(new.total_score)
        .bind(Json(&new.category_scores))
        .bind(&new.strengths)
        .bind(&new.areas_for_improvement)
        .bind(&new.final_assessment)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn feedback_for_interview(
        &self,
        interview_id: Uuid,
        user_id: &str,
    ) -> Result<Option<FeedbackRow>> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            "SELECT * FROM feedback WHERE interview_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(interview_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
