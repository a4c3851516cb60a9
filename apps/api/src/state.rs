use crate::careers::dispatcher::QueryDispatcher;
use crate::careers::widget::ElementIds;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the `Arc<dyn StructuredCompletion>`; cheap to clone.
    pub dispatcher: QueryDispatcher,
    /// Handles for every widget page rendered by this server.
    pub element_ids: ElementIds,
}
