// Interview generation and retrieval.
// Implements: dual-shape webhook decoding (voice-agent tool calls and direct
// API callers), question generation, persistence, and the read accessors.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod covers;
pub mod generator;
pub mod handlers;
pub mod payload;
pub mod prompts;
