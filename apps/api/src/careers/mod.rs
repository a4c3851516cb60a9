// Career suggestions for middle-school students.
// Implements: query dispatch, prompt + response schema, widget UI state, HTTP handlers.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod dispatcher;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod widget;
