pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::interviews::handlers as interviews;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation webhook (voice agent + direct callers)
        .route(
            "/api/vapi/generate",
            get(interviews::handle_generate_ack).post(interviews::handle_generate),
        )
        // Interview reads
        .route("/api/v1/interviews", get(interviews::handle_list_interviews))
        .route(
            "/api/v1/interviews/latest",
            get(interviews::handle_latest_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interviews::handle_get_interview),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            get(feedback::handle_get_feedback),
        )
        // Feedback generation
        .route("/api/v1/feedback", post(feedback::handle_create_feedback))
        .with_state(state)
}
