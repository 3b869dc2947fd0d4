//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_search_form_handler, delete_search_form_handler, home_handler, search_page_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`                     - Providers, new search form, recent searches
/// - `POST /searches`             - Submit the new search form
/// - `GET  /searches/{id}`        - Search details with link-outs
/// - `POST /searches/{id}/delete` - Delete a search
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/searches", post(create_search_form_handler))
        .route("/searches/{id}", get(search_page_handler))
        .route("/searches/{id}/delete", post(delete_search_form_handler))
}
