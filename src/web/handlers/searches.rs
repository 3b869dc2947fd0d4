//! Search form and detail page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use validator::Validate;

use super::home::home_with_error;
use crate::domain::entities::Search;
use crate::domain::link_builder::LinkOut;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::SearchForm;

/// Template for a single search with its link-outs.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub search: Search,
    pub links: Vec<LinkOut<'static>>,
}

/// Records a search submitted from the home page form.
///
/// # Endpoint
///
/// `POST /searches`
///
/// Redirects to `/` with `303 See Other` on success. On invalid input the
/// home page is rendered again with the error and `400 Bad Request`.
pub async fn create_search_form_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Response {
    if let Err(e) = form.validate() {
        return home_with_error(&state, StatusCode::BAD_REQUEST, e.to_string()).await;
    }

    match state.search_service.create_search(form.into()).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e @ AppError::Validation { .. }) => {
            home_with_error(&state, StatusCode::BAD_REQUEST, e.to_string()).await
        }
        Err(e) => e.into_response(),
    }
}

/// Renders one search with a link-out per provider.
///
/// # Endpoint
///
/// `GET /searches/{id}`
///
/// Unknown ids get a plain `404 Not found` page.
pub async fn search_page_handler(Path(id): Path<i64>, State(state): State<AppState>) -> Response {
    match state.search_service.get_search(id).await {
        Ok(search) => {
            let links = state.search_service.links_for(&search);
            SearchTemplate { search, links }.into_response()
        }
        Err(e) if e.is_not_found() => (StatusCode::NOT_FOUND, Html("Not found")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Deletes a search from the home page and redirects back.
///
/// # Endpoint
///
/// `POST /searches/{id}/delete`
///
/// Deleting an unknown id still redirects, so a double submit is harmless.
pub async fn delete_search_form_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.search_service.delete_search(id).await {
        Ok(()) => Ok(Redirect::to("/")),
        Err(e) if e.is_not_found() => Ok(Redirect::to("/")),
        Err(e) => Err(e),
    }
}
