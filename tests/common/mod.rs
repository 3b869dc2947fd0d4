#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use husky::api;
use husky::api::handlers::health_handler;
use husky::domain::entities::{Search, SearchDraft};
use husky::infrastructure::persistence::InMemorySearchRepository;
use husky::state::AppState;
use husky::web;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const RECENT_LIMIT: i64 = 50;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemorySearchRepository::new()), RECENT_LIMIT)
}

/// All routes without the rate limiter, which needs a peer address.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}

pub fn draft(origin: &str, destination: &str) -> SearchDraft {
    SearchDraft {
        origin: Some(origin.to_string()),
        destination: Some(destination.to_string()),
        ..Default::default()
    }
}

pub async fn seed_search(state: &AppState, origin: &str, destination: &str) -> Search {
    state
        .search_service
        .create_search(draft(origin, destination))
        .await
        .unwrap()
}

/// Inserts a fixed `ConnectInfo` so peer-keyed middleware works under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
