//! Widget UI State Controller: the view model of the career-search page.
//!
//! `WidgetView` owns one handle per page element, addressed by the ids in
//! `ElementIds`. Every state change goes through the `UiSurface` contract;
//! the page HTML is a pure function of the view (`WidgetView::render`).

use askama::Template;

use crate::careers::models::{CareerSuggestions, UiState};

/// Shown when neither recommended nor contextual jobs came back.
pub const NO_RESULTS_MESSAGE: &str =
    "입력하신 내용과 관련된 직업을 찾지 못했어요. 다른 관심사나 키워드로 다시 검색해보세요.";

/// The one message shown for every failed search.
pub const SEARCH_ERROR_MESSAGE: &str =
    "직업 추천을 가져오는 중 오류가 발생했어요. 잠시 후 다시 시도해주세요.";

// ────────────────────────────────────────────────────────────────────────────
// Contract
// ────────────────────────────────────────────────────────────────────────────

/// Rendering contract driven by the dispatcher. No business logic lives here.
pub trait UiSurface {
    /// Empties and hides every result region and the message.
    fn clear(&mut self);
    /// Disables the submit control and reveals the loading indicator.
    fn show_loading(&mut self);
    /// Fills the non-empty regions; shows the no-results message when
    /// both job lists are empty.
    fn show_results(&mut self, suggestions: &CareerSuggestions);
    fn show_error(&mut self, message: &str);
    /// Re-enables the submit control and hides the loading indicator.
    fn reset(&mut self);
}

// ────────────────────────────────────────────────────────────────────────────
// Element handles
// ────────────────────────────────────────────────────────────────────────────

/// Fixed identifiers of the page elements the controller writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub input: String,
    pub submit: String,
    pub job_results: String,
    pub achievement_results: String,
    pub contextual_job_results: String,
    pub message: String,
    pub loading: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            input: "searchInput".to_string(),
            submit: "searchButton".to_string(),
            job_results: "jobResults".to_string(),
            achievement_results: "achievementResults".to_string(),
            contextual_job_results: "contextualJobResults".to_string(),
            message: "message".to_string(),
            loading: "loading".to_string(),
        }
    }
}

/// A titled container of tags. Hidden unless it holds at least one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRegion {
    pub id: String,
    pub heading: &'static str,
    pub hidden: bool,
    pub tags: Vec<String>,
}

impl ResultRegion {
    fn new(id: &str, heading: &'static str) -> Self {
        Self {
            id: id.to_string(),
            heading,
            hidden: true,
            tags: Vec::new(),
        }
    }

    fn fill(&mut self, items: &[String]) {
        self.tags = items.to_vec();
        self.hidden = self.tags.is_empty();
    }

    fn empty(&mut self) {
        self.tags.clear();
        self.hidden = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Info => "message-info",
            MessageKind::Error => "message-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRegion {
    pub id: String,
    pub hidden: bool,
    pub text: String,
    pub kind: MessageKind,
}

// ────────────────────────────────────────────────────────────────────────────
// WidgetView
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct WidgetView {
    ids: ElementIds,
    /// Current value of the text input.
    pub query: String,
    pub submit_disabled: bool,
    pub loading_hidden: bool,
    pub jobs: ResultRegion,
    pub achievements: ResultRegion,
    pub contextual_jobs: ResultRegion,
    pub message: MessageRegion,
    state: UiState,
}

impl WidgetView {
    pub fn new(ids: ElementIds) -> Self {
        Self {
            jobs: ResultRegion::new(&ids.job_results, "추천 직업"),
            achievements: ResultRegion::new(&ids.achievement_results, "관련 성취기준"),
            contextual_jobs: ResultRegion::new(&ids.contextual_job_results, "상황 속 직업"),
            message: MessageRegion {
                id: ids.message.clone(),
                hidden: true,
                text: String::new(),
                kind: MessageKind::Info,
            },
            query: String::new(),
            submit_disabled: false,
            loading_hidden: true,
            state: UiState::Idle,
            ids,
        }
    }

    /// Pre-fills the text input, as the browser would after a form post.
    pub fn with_query(mut self, raw: &str) -> Self {
        self.query = raw.to_string();
        self
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Result regions in page order.
    pub fn regions(&self) -> [&ResultRegion; 3] {
        [&self.jobs, &self.achievements, &self.contextual_jobs]
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        WidgetTemplate { view: self }.render()
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.message.text = text.to_string();
        self.message.kind = kind;
        self.message.hidden = false;
    }
}

impl Default for WidgetView {
    fn default() -> Self {
        Self::new(ElementIds::default())
    }
}

impl UiSurface for WidgetView {
    fn clear(&mut self) {
        self.jobs.empty();
        self.achievements.empty();
        self.contextual_jobs.empty();
        self.message.hidden = true;
        self.message.text.clear();
    }

    fn show_loading(&mut self) {
        self.submit_disabled = true;
        self.loading_hidden = false;
        self.state = UiState::Loading;
    }

    fn show_results(&mut self, suggestions: &CareerSuggestions) {
        self.jobs.fill(&suggestions.recommended_jobs);
        self.achievements.fill(&suggestions.related_achievements);
        self.contextual_jobs.fill(&suggestions.contextual_jobs);
        if !suggestions.has_results() {
            self.show_message(NO_RESULTS_MESSAGE, MessageKind::Info);
        }
        self.state = UiState::Success;
    }

    fn show_error(&mut self, message: &str) {
        self.show_message(message, MessageKind::Error);
        self.state = UiState::Error;
    }

    fn reset(&mut self) {
        self.submit_disabled = false;
        self.loading_hidden = true;
        // A call abandoned mid-flight leaves nothing to show.
        if self.state == UiState::Loading {
            self.state = UiState::Idle;
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="ko">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>진로 탐색 도우미</title>
    <style>
      body { font-family: system-ui, sans-serif; background: #f8fafc; color: #0f172a; margin: 0; }
      main { max-width: 42rem; margin: 0 auto; padding: 2.5rem 1rem; }
      form { display: flex; gap: 0.5rem; }
      input { flex: 1; padding: 0.6rem 0.8rem; border: 1px solid #cbd5e1; border-radius: 0.5rem; }
      button { padding: 0.6rem 1.2rem; border: 0; border-radius: 0.5rem; background: #4f46e5; color: #fff; }
      button[disabled] { background: #94a3b8; }
      .loading { margin-top: 1rem; color: #475569; }
      .message { margin-top: 1rem; }
      .message-error { color: #b91c1c; }
      .message-info { color: #475569; }
      .tags { display: flex; flex-wrap: wrap; gap: 0.4rem; }
      .tag { padding: 0.3rem 0.7rem; border-radius: 999px; background: #e0e7ff; }
    </style>
  </head>
  <body>
    <main data-state="{{ view.state() }}">
      <h1>나에게 맞는 직업 찾기</h1>
      <p>관심 있는 분야나 좋아하는 활동을 자유롭게 입력해보세요.</p>
      <form method="post" action="/" onsubmit="var button = document.getElementById('{{ view.ids.submit }}'); if (button.disabled) { return false; } button.disabled = true; document.getElementById('{{ view.ids.loading }}').hidden = false;">
        <input id="{{ view.ids.input }}" name="query" type="text" value="{{ view.query }}" placeholder="예: 동물을 좋아하고 그림 그리기를 즐겨요" autocomplete="off" />
        <button id="{{ view.ids.submit }}" type="submit"{% if view.submit_disabled %} disabled{% endif %}>추천받기</button>
      </form>
      <div id="{{ view.ids.loading }}" class="loading"{% if view.loading_hidden %} hidden{% endif %}>추천 직업을 찾고 있어요...</div>
      <p id="{{ view.message.id }}" class="message {{ view.message.kind.css_class() }}" aria-live="polite"{% if view.message.hidden %} hidden{% endif %}>{{ view.message.text }}</p>
      {% for region in view.regions() %}
      <section class="results"{% if region.hidden %} hidden{% endif %}>
        <h2>{{ region.heading }}</h2>
        <div id="{{ region.id }}" class="tags">{% for tag in region.tags %}<span class="tag">{{ tag }}</span>{% endfor %}</div>
      </section>
      {% endfor %}
    </main>
  </body>
</html>"#,
    ext = "html"
)]
struct WidgetTemplate<'a> {
    view: &'a WidgetView,
}
