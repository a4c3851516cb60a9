use std::fmt;

use serde::{Deserialize, Serialize};

/// A student's free-text interests, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The model's answer for one search. Replaced wholesale by the next search.
///
/// Wire names match the requested response schema. A reply missing any of the
/// three lists fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestions {
    pub recommended_jobs: Vec<String>,
    pub related_achievements: Vec<String>,
    pub contextual_jobs: Vec<String>,
}

impl CareerSuggestions {
    /// Achievement standards alone do not count as a match.
    pub fn has_results(&self) -> bool {
        !self.recommended_jobs.is_empty() || !self.contextual_jobs.is_empty()
    }
}

/// What the widget is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success => "success",
            UiState::Error => "error",
        };
        f.write_str(name)
    }
}
