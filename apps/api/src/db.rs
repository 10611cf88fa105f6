use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool with the schema applied.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Brings the schema up to date. Every statement is idempotent, so this
/// runs on every startup.
async fn init_schema(pool: &PgPool) -> Result<()> {
    // Interviews table
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS interviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            role TEXT NOT NULL,
            interview_type TEXT NOT NULL,
            level TEXT NOT NULL,
            techstack TEXT[] NOT NULL DEFAULT '{}',
            questions TEXT[] NOT NULL DEFAULT '{}',
            user_id TEXT NOT NULL,
            finalized BOOLEAN NOT NULL DEFAULT TRUE,
            cover_image TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_interviews_user_created
            ON interviews (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_interviews_finalized_created
            ON interviews (finalized, created_at DESC)",
    )
    .execute(pool)
    .await?;

    // Feedback table. No FK to interviews and no unique constraint on
    // (interview_id, user_id): the record id is the only dedup handle, and
    // callers that omit it get one row per run.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS feedback (
            id UUID PRIMARY KEY,
            interview_id UUID NOT NULL,
            user_id TEXT NOT NULL,
            total_score DOUBLE PRECISION NOT NULL,
            category_scores JSONB NOT NULL,
            strengths TEXT[] NOT NULL DEFAULT '{}',
            areas_for_improvement TEXT[] NOT NULL DEFAULT '{}',
            final_assessment TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_feedback_interview_user
            ON feedback (interview_id, user_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
