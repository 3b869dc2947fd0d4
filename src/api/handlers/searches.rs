//! Handlers for search endpoints (create, list, fetch, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::search::{
    CreateSearchRequest, ListSearchesParams, SearchListResponse, SearchWithLinksResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Records a search and returns it with its provider link-outs.
///
/// # Endpoint
///
/// `POST /api/searches`
///
/// # Request Body
///
/// ```json
/// {
///   "origin": "jfk",
///   "destination": "lhr",
///   "depart_start": "2025-06-01",   // optional
///   "depart_end": null,             // optional
///   "cabin": "business",            // optional, default "economy"
///   "passengers": 2,                // optional, default 1
///   "notes": "anniversary"          // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if origin or destination is missing, passengers
/// is out of range, or a date is malformed.
pub async fn create_search_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateSearchRequest>,
) -> Result<(StatusCode, Json<SearchWithLinksResponse>), AppError> {
    payload.validate()?;

    let search = state.search_service.create_search(payload.into()).await?;
    let links = state.search_service.links_for(&search);

    Ok((StatusCode::CREATED, Json(SearchWithLinksResponse { search, links })))
}

/// Lists recent searches, newest first.
///
/// # Endpoint
///
/// `GET /api/searches?limit=100`
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside 1..=1000.
pub async fn list_searches_handler(
    State(state): State<AppState>,
    Query(params): Query<ListSearchesParams>,
) -> Result<Json<SearchListResponse>, AppError> {
    params.validate()?;

    let searches = state.search_service.list_recent(params.limit()).await?;

    Ok(Json(SearchListResponse { searches }))
}

/// Returns one search with its provider link-outs.
///
/// # Endpoint
///
/// `GET /api/searches/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the search does not exist.
pub async fn get_search_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<SearchWithLinksResponse>, AppError> {
    let search = state.search_service.get_search(id).await?;
    let links = state.search_service.links_for(&search);

    Ok(Json(SearchWithLinksResponse { search, links }))
}

/// Deletes a search.
///
/// # Endpoint
///
/// `DELETE /api/searches/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the search does not exist.
pub async fn delete_search_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.search_service.delete_search(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
