//! Axum route handlers for the career-search widget and its JSON API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::careers::dispatcher::SearchOutcome;
use crate::careers::models::{CareerSuggestions, Query};
use crate::careers::widget::{WidgetView, SEARCH_ERROR_MESSAGE};
use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub suggestions: CareerSuggestions,
    pub has_results: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Renders the widget in its idle state.
pub async fn handle_widget_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = WidgetView::new(state.element_ids.clone());
    Ok(Html(view.render()?))
}

/// POST /
///
/// Form submit (button or Enter). Runs one search against a fresh view and
/// renders whatever state it ended in. Blank input renders the untouched page.
/// A failed search still renders the page, with 504 for an outbound timeout
/// and 502 for any other failure so clients can tell.
pub async fn handle_widget_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut view = WidgetView::new(state.element_ids.clone()).with_query(&form.query);
    let status = match state.dispatcher.search(&form.query, &mut view).await {
        SearchOutcome::Ignored => StatusCode::OK,
        SearchOutcome::Completed(suggestions) => {
            if !suggestions.has_results() {
                debug!("Career search matched no jobs; rendering no-results message");
            }
            StatusCode::OK
        }
        SearchOutcome::Failed(LlmError::Http(e)) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        SearchOutcome::Failed(e) => {
            debug!("Rendering search error page: {e}");
            StatusCode::BAD_GATEWAY
        }
    };
    Ok((status, Html(view.render()?)))
}

/// POST /api/v1/careers/search
///
/// JSON counterpart of the widget. 204 for blank input.
pub async fn handle_search_api(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Response, AppError> {
    let Some(query) = Query::parse(&request.query) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let suggestions = state.dispatcher.suggest(&query).await.map_err(|e| {
        tracing::warn!("Career search API call failed: {e}");
        AppError::Llm(SEARCH_ERROR_MESSAGE.to_string())
    })?;

    Ok(Json(SearchResponse {
        has_results: suggestions.has_results(),
        suggestions,
    })
    .into_response())
}
