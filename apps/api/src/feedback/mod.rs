// Post-interview feedback.
// Implements: rubric scoring of a transcript via the model, upsert keyed by
// a caller-resolved feedback id, and retrieval per (interview, user) pair.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
