//! Interview generation — orchestrates the question pipeline.
//!
//! Flow: build prompt → single LLM call → extract JSON array → persist.
//!
//! Error mapping is fixed by the webhook contract: validation failures are
//! handled upstream (400), extraction failures surface the raw model text
//! (500), and everything else propagates as an opaque message (500).

use tracing::info;

use crate::errors::AppError;
use crate::interviews::covers::random_cover;
use crate::interviews::payload::{ValidatedRequest, DEFAULT_QUESTION_COUNT};
use crate::interviews::prompts::QUESTIONS_PROMPT_TEMPLATE;
use crate::llm_client::extract::extract_json_as;
use crate::llm_client::LlmClient;
use crate::models::interview::{InterviewRow, NewInterview};
use crate::store::InterviewStore;

/// Builds the question-generation prompt for a validated request.
pub fn build_questions_prompt(request: &ValidatedRequest) -> String {
    let amount = request
        .amount
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_QUESTION_COUNT.to_string());

    QUESTIONS_PROMPT_TEMPLATE
        .replace("{amount}", &amount)
        .replace("{role}", &request.role)
        .replace("{level}", &request.level)
        .replace("{type}", &request.interview_type)
        .replace("{techstack}", &request.techstack.join(", "))
}

/// Generates questions for the request and persists the interview.
/// The stored row comes back so the handler can log or surface it.
pub async fn generate_interview(
    store: &dyn InterviewStore,
    llm: &LlmClient,
    request: ValidatedRequest,
) -> Result<InterviewRow, AppError> {
    let prompt = build_questions_prompt(&request);

    let text = llm
        .call(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    // Shape check, not just syntax: an object or a non-string array is an
    // extraction failure even though it parsed.
    let questions: Vec<String> = extract_json_as(&text)?;

    let row = store
        .add_interview(NewInterview {
            role: request.role,
            interview_type: request.interview_type,
            level: request.level,
            techstack: request.techstack,
            questions,
            user_id: request.user_id,
            finalized: true,
            cover_image: random_cover().to_string(),
        })
        .await
        .map_err(AppError::Internal)?;

    info!(
        "Generated interview {} for user {} ({} questions)",
        row.id,
        row.user_id,
        row.questions.len()
    );

    Ok(row)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interviews::payload::Amount;

    fn request(amount: Option<Amount>) -> ValidatedRequest {
        ValidatedRequest {
            role: "Frontend Developer".to_string(),
            interview_type: "technical".to_string(),
            level: "junior".to_string(),
            user_id: "u1".to_string(),
            techstack: vec!["React".to_string(), "Node".to_string()],
            amount,
        }
    }

    #[test]
    fn prompt_fills_every_placeholder() {
        let prompt = build_questions_prompt(&request(Some(Amount::Count(3.into()))));

        assert!(prompt.contains("JSON array of 3 interview questions"));
        assert!(prompt.contains("Role: Frontend Developer"));
        assert!(prompt.contains("Level: junior"));
        assert!(prompt.contains("Type: technical"));
        assert!(prompt.contains("Techstack: React, Node"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn prompt_defaults_amount_when_absent() {
        let prompt = build_questions_prompt(&request(None));
        assert!(prompt.contains("JSON array of 5 interview questions"));
    }

    #[test]
    fn prompt_renders_string_amount_verbatim() {
        let prompt = build_questions_prompt(&request(Some(Amount::Text("ten".to_string()))));
        assert!(prompt.contains("JSON array of ten interview questions"));
    }
}
