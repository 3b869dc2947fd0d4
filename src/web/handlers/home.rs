//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::catalog::Provider;
use crate::domain::entities::Search;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - The provider catalog
/// - The "new search" form, with an optional error banner
/// - The most recent searches
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub providers: &'static [Provider],
    pub searches: Vec<Search>,
    pub total: i64,
    pub error: Option<String>,
}

impl HomeTemplate {
    /// Loads the page data from the service.
    pub async fn load(state: &AppState, error: Option<String>) -> Result<Self, AppError> {
        let service = &state.search_service;

        Ok(Self {
            providers: service.providers(),
            searches: service.list_recent(state.recent_limit).await?,
            total: service.count().await?,
            error,
        })
    }
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    HomeTemplate::load(&state, None).await
}

/// Re-renders the home page with an error banner and the given status.
pub(super) async fn home_with_error(state: &AppState, status: StatusCode, message: String) -> Response {
    match HomeTemplate::load(state, Some(message)).await {
        Ok(page) => (status, page).into_response(),
        Err(e) => e.into_response(),
    }
}
