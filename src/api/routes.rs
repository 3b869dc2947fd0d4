//! API route configuration.

use crate::api::handlers::{
    create_search_handler, delete_search_handler, get_search_handler, list_searches_handler,
    provider_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET    /providers`        - Provider catalog
/// - `GET    /searches`         - Recent searches (`?limit=`, default 100)
/// - `POST   /searches`         - Record a search, returns it with link-outs
/// - `GET    /searches/{id}`    - A search with its link-outs
/// - `DELETE /searches/{id}`    - Delete a search
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/providers", get(provider_list_handler))
        .route(
            "/searches",
            get(list_searches_handler).post(create_search_handler),
        )
        .route(
            "/searches/{id}",
            get(get_search_handler).delete(delete_search_handler),
        )
}
