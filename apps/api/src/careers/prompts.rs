// All LLM prompt constants for the careers module.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::prompts::{JSON_SCHEMA_INSTRUCTION, KOREAN_ONLY_INSTRUCTION};

/// Requested list sizes. Hints to the model only; never enforced on the reply.
pub const RECOMMENDED_JOBS_HINT: usize = 10;
pub const RELATED_ACHIEVEMENTS_HINT: usize = 3;
pub const CONTEXTUAL_JOBS_HINT: usize = 5;

/// Counselor persona. Combined with the shared fragments by `system_instruction()`.
pub const COUNSELOR_PERSONA: &str = "당신은 한국 중학생의 진로 탐색을 돕는 친절하고 전문적인 진로 상담 교사입니다. \
    학생의 관심사와 강점을 바탕으로 현실적이고 다양한 직업을 추천하고, \
    관련된 교육과정 성취기준을 함께 안내합니다.";

/// Career prompt template. Replace `{query}` before sending.
pub const CAREER_PROMPT_TEMPLATE: &str =
    r#"한국 중학생을 위한 진로 상담 요청입니다. 다음 내용과 관련된 직업을 추천해주세요: "{query}""#;

pub fn system_instruction() -> String {
    format!("{COUNSELOR_PERSONA} {KOREAN_ONLY_INSTRUCTION} {JSON_SCHEMA_INSTRUCTION}")
}

/// The query is interpolated as-is; the template adds the surrounding quotes.
pub fn build_career_prompt(query: &str) -> String {
    CAREER_PROMPT_TEMPLATE.replace("{query}", query)
}

/// Gemini `responseSchema` for `CareerSuggestions`. All three fields required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendedJobs": string_array(&format!(
                "입력 내용과 관련된 추천 직업 {RECOMMENDED_JOBS_HINT}개"
            )),
            "relatedAchievements": string_array(&format!(
                "추천 직업과 관련된 중학교 교육과정 성취기준 {RELATED_ACHIEVEMENTS_HINT}개"
            )),
            "contextualJobs": string_array(&format!(
                "입력 내용의 상황이나 맥락에서 떠올릴 수 있는 직업 {CONTEXTUAL_JOBS_HINT}개"
            )),
        },
        "required": ["recommendedJobs", "relatedAchievements", "contextualJobs"],
        "propertyOrdering": ["recommendedJobs", "relatedAchievements", "contextualJobs"]
    })
}

fn string_array(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": { "type": "STRING" }
    })
}
