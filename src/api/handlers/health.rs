//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "postgres reachable, 12 searches" },
///     "catalog": { "status": "ok", "message": "7 providers" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let catalog = check_catalog(&state);

    let all_healthy = storage.is_ok() && catalog.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { storage, catalog },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the search store answers queries.
async fn check_storage(state: &AppState) -> CheckStatus {
    let service = &state.search_service;
    let backend = service.backend();

    if let Err(e) = service.ping().await {
        return CheckStatus::error(format!("{backend} unreachable: {e}"));
    }

    match service.count().await {
        Ok(count) => CheckStatus::ok(format!("{backend} reachable, {count} searches")),
        Err(e) => CheckStatus::error(format!("{backend} error: {e}")),
    }
}

/// Checks that the provider catalog is populated.
fn check_catalog(state: &AppState) -> CheckStatus {
    let providers = state.search_service.providers();
    if providers.is_empty() {
        CheckStatus::error("No providers configured")
    } else {
        CheckStatus::ok(format!("{} providers", providers.len()))
    }
}
