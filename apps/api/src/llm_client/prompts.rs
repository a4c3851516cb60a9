// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every system prompt that requests structured output.
pub const JSON_SCHEMA_INSTRUCTION: &str = "응답은 반드시 지정된 JSON 스키마를 따라야 합니다.";

/// Instruction fixing the answer language.
pub const KOREAN_ONLY_INSTRUCTION: &str = "모든 답변은 한국어로 작성해주세요.";
