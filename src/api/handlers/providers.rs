//! Handler for the provider catalog endpoint.

use axum::{Json, extract::State};

use crate::api::dto::provider::ProviderListResponse;
use crate::state::AppState;

/// Lists all supported loyalty programs in display order.
///
/// # Endpoint
///
/// `GET /api/providers`
pub async fn provider_list_handler(State(state): State<AppState>) -> Json<ProviderListResponse> {
    Json(ProviderListResponse {
        providers: state.search_service.providers(),
    })
}
