//! Query Dispatcher: turns one submitted query into one structured-completion call.
//!
//! Flow: trim → clear → show_loading → LLM call → show_results | show_error → reset.
//!
//! `reset` lives in `LoadingScope::drop`, so it runs even when the search
//! future is dropped mid-call (e.g. the HTTP client hung up).

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::careers::models::{CareerSuggestions, Query};
use crate::careers::prompts::{
    build_career_prompt, response_schema, system_instruction, CONTEXTUAL_JOBS_HINT,
    RECOMMENDED_JOBS_HINT, RELATED_ACHIEVEMENTS_HINT,
};
use crate::careers::widget::{UiSurface, SEARCH_ERROR_MESSAGE};
use crate::llm_client::{complete_json, CompletionRequest, LlmError, StructuredCompletion};

/// How a `search` call ended. The UI has already been updated accordingly.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Blank input: no UI change, no outbound call.
    Ignored,
    Completed(CareerSuggestions),
    Failed(LlmError),
}

#[derive(Clone)]
pub struct QueryDispatcher {
    llm: Arc<dyn StructuredCompletion>,
}

impl QueryDispatcher {
    pub fn new(llm: Arc<dyn StructuredCompletion>) -> Self {
        Self { llm }
    }

    /// Runs one search against `ui`. Never fails: every error is rendered
    /// as `SEARCH_ERROR_MESSAGE` and returned in the outcome.
    pub async fn search<S>(&self, raw: &str, ui: &mut S) -> SearchOutcome
    where
        S: UiSurface + Send,
    {
        let Some(query) = Query::parse(raw) else {
            return SearchOutcome::Ignored;
        };

        let search_id = Uuid::new_v4();
        info!(%search_id, "Career search started ({} chars)", query.as_str().chars().count());

        ui.clear();
        let mut scope = LoadingScope::enter(ui);

        match self.suggest(&query).await {
            Ok(suggestions) => {
                info!(
                    %search_id,
                    "Career search succeeded: jobs={}, achievements={}, contextual={}",
                    suggestions.recommended_jobs.len(),
                    suggestions.related_achievements.len(),
                    suggestions.contextual_jobs.len()
                );
                scope.show_results(&suggestions);
                SearchOutcome::Completed(suggestions)
            }
            Err(e) => {
                warn!(%search_id, "Career search failed: {e}");
                scope.show_error(SEARCH_ERROR_MESSAGE);
                SearchOutcome::Failed(e)
            }
        }
    }

    /// The bare structured-completion call, without any UI side effects.
    pub async fn suggest(&self, query: &Query) -> Result<CareerSuggestions, LlmError> {
        let system = system_instruction();
        let prompt = build_career_prompt(query.as_str());
        let schema = response_schema();

        let suggestions: CareerSuggestions = complete_json(
            self.llm.as_ref(),
            CompletionRequest {
                system: &system,
                prompt: &prompt,
                response_schema: &schema,
            },
        )
        .await?;

        log_size_drift(&suggestions);
        Ok(suggestions)
    }
}

/// List sizes are requested, not enforced; drift is only noted.
fn log_size_drift(suggestions: &CareerSuggestions) {
    let lists = [
        (
            "recommendedJobs",
            suggestions.recommended_jobs.len(),
            RECOMMENDED_JOBS_HINT,
        ),
        (
            "relatedAchievements",
            suggestions.related_achievements.len(),
            RELATED_ACHIEVEMENTS_HINT,
        ),
        (
            "contextualJobs",
            suggestions.contextual_jobs.len(),
            CONTEXTUAL_JOBS_HINT,
        ),
    ];
    for (field, got, hint) in lists {
        if got != hint {
            debug!("{field}: model returned {got} items (asked for {hint})");
        }
    }
}

/// Holds the surface in the loading state; `reset` runs on drop.
struct LoadingScope<'a, S: UiSurface> {
    ui: &'a mut S,
}

impl<'a, S: UiSurface> LoadingScope<'a, S> {
    fn enter(ui: &'a mut S) -> Self {
        ui.show_loading();
        Self { ui }
    }
}

impl<S: UiSurface> Deref for LoadingScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.ui
    }
}

impl<S: UiSurface> DerefMut for LoadingScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.ui
    }
}

impl<S: UiSurface> Drop for LoadingScope<'_, S> {
    fn drop(&mut self) {
        self.ui.reset();
    }
}
