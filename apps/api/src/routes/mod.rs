pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Widget page (form posts back to itself)
        .route(
            "/",
            get(handlers::handle_widget_page).post(handlers::handle_widget_search),
        )
        // Career API
        .route("/api/v1/careers/search", post(handlers::handle_search_api))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::dispatcher::QueryDispatcher;
    use crate::careers::widget::{ElementIds, NO_RESULTS_MESSAGE, SEARCH_ERROR_MESSAGE};
    use crate::llm_client::{CompletionRequest, LlmError, StructuredCompletion};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubCompletion {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StructuredCompletion for StubCompletion {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(str::to_string)
                .ok_or(LlmError::EmptyContent)
        }
    }

    fn app(reply: Option<&'static str>) -> (Router, Arc<StubCompletion>) {
        app_with_ids(reply, ElementIds::default())
    }

    fn app_with_ids(
        reply: Option<&'static str>,
        element_ids: ElementIds,
    ) -> (Router, Arc<StubCompletion>) {
        let stub = Arc::new(StubCompletion {
            reply,
            calls: AtomicUsize::new(0),
        });
        let state = AppState {
            dispatcher: QueryDispatcher::new(stub.clone()),
            element_ids,
        };
        (build_router(state), stub)
    }

    fn custom_ids() -> ElementIds {
        ElementIds {
            submit: "careerSubmit".to_string(),
            loading: "careerSpinner".to_string(),
            ..ElementIds::default()
        }
    }

    fn assert_submit_guard(html: &str) {
        assert!(html.contains("onsubmit="));
        assert!(html.contains("document.getElementById('careerSubmit')"));
        assert!(html.contains("button.disabled = true;"));
        assert!(html.contains("document.getElementById('careerSpinner').hidden = false;"));
        assert!(html.contains(r#"id="careerSubmit""#));
        assert!(html.contains(r#"id="careerSpinner""#));
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(query: &str) -> Request<Body> {
        // Only ASCII and spaces are posted from tests; '+' encodes the space.
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("query={}", query.replace(' ', "+"))))
            .unwrap()
    }

    fn json_post(body: &str) -> Request<Body> {
        Request::post("/api/v1/careers/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const REPLY: &str = r#"{"recommendedJobs": ["Chef", "Baker"], "relatedAchievements": [], "contextualJobs": ["Food critic"]}"#;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let (router, _) = app(None);
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_widget_page_renders_idle() {
        let (router, stub) = app(Some(REPLY));
        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"id="jobResults""#));
        assert!(html.contains(r#"id="achievementResults""#));
        assert!(html.contains(r#"id="contextualJobResults""#));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_widget_search_renders_tags_and_keeps_query() {
        let (router, stub) = app(Some(REPLY));
        let response = router.oneshot(form_post("baking bread")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<span class="tag">Chef</span><span class="tag">Baker</span>"#));
        assert!(html.contains(r#"<span class="tag">Food critic</span>"#));
        assert!(html.contains(r#"value="baking bread""#));
        // Controls are back to interactive once the page is rendered
        assert!(html.contains(r#"type="submit">"#));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_widget_search_failure_shows_fixed_message() {
        let (router, _) = app(None);
        let response = router.oneshot(form_post("music")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_text(response).await;
        assert!(html.contains(SEARCH_ERROR_MESSAGE));
        assert!(!html.contains(r#"<span class="tag">"#));
    }

    #[tokio::test]
    async fn test_widget_search_blank_query_makes_no_call() {
        let (router, stub) = app(Some(REPLY));
        let html = body_text(router.oneshot(form_post("   ")).await.unwrap()).await;
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
        assert!(!html.contains(NO_RESULTS_MESSAGE));
        assert!(!html.contains(r#"<span class="tag">"#));
    }

    #[tokio::test]
    async fn test_widget_page_disables_submit_with_configured_ids() {
        let (router, _) = app_with_ids(Some(REPLY), custom_ids());
        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_submit_guard(&body_text(response).await);
    }

    #[tokio::test]
    async fn test_widget_search_result_page_keeps_submit_guard() {
        let (router, _) = app_with_ids(Some(REPLY), custom_ids());
        let response = router.oneshot(form_post("x")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_submit_guard(&body_text(response).await);
    }

    #[tokio::test]
    async fn test_widget_search_decodes_korean_query() {
        let (router, stub) = app(Some(REPLY));
        // "동물 돌보기", percent-encoded as a browser would post it
        let request = Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "query=%EB%8F%99%EB%AC%BC+%EB%8F%8C%EB%B3%B4%EA%B8%B0",
            ))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"value="동물 돌보기""#));
        assert!(html.contains(r#"<span class="tag">Chef</span>"#));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_widget_search_timeout_is_gateway_timeout() {
        use crate::config::Config;
        use crate::llm_client::LlmClient;
        use std::time::Duration;

        // Gemini stand-in that never answers in time
        let slow = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "{}"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, slow).await.unwrap();
        });

        let llm = LlmClient::new(&Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-test".to_string(),
            gemini_api_base: format!("http://{addr}"),
            llm_timeout: Some(Duration::from_millis(100)),
            port: 0,
            rust_log: "debug".to_string(),
        })
        .unwrap();
        let router = build_router(AppState {
            dispatcher: QueryDispatcher::new(Arc::new(llm)),
            element_ids: ElementIds::default(),
        });

        let response = router.oneshot(form_post("space")).await.unwrap();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        let html = body_text(response).await;
        assert!(html.contains(SEARCH_ERROR_MESSAGE));
        assert!(!html.contains("disabled>"));
    }

    #[tokio::test]
    async fn test_api_search_returns_suggestions() {
        let (router, _) = app(Some(REPLY));
        let response = router
            .oneshot(json_post(r#"{"query": "cooking"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["hasResults"], true);
        assert_eq!(json["suggestions"]["recommendedJobs"][1], "Baker");
        assert_eq!(json["suggestions"]["contextualJobs"][0], "Food critic");
    }

    #[tokio::test]
    async fn test_api_search_blank_query_is_no_content() {
        let (router, stub) = app(Some(REPLY));
        let response = router.oneshot(json_post(r#"{"query": " "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_api_search_failure_is_llm_error() {
        let (router, _) = app(None);
        let response = router
            .oneshot(json_post(r#"{"query": "art"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "LLM_ERROR");
        assert_eq!(json["error"]["message"], SEARCH_ERROR_MESSAGE);
    }
}
