//! Search recording and link-out service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::catalog::{self, Provider};
use crate::domain::entities::{Search, SearchDraft};
use crate::domain::link_builder::{LinkOut, SearchCriteria, build_links};
use crate::domain::repositories::SearchRepository;
use crate::error::AppError;

/// Service for recording searches and producing their provider link-outs.
///
/// Input normalization happens here, before anything reaches storage or the
/// link builder.
pub struct SearchService<R: SearchRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: SearchRepository + ?Sized> SearchService<R> {
    /// Creates a new search service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Normalizes and stores a new search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the draft is missing an origin or
    /// destination, has zero passengers, or carries a malformed date.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_search(&self, draft: SearchDraft) -> Result<Search, AppError> {
        let new_search = draft.normalize()?;
        let search = self.repository.create(new_search).await?;

        tracing::info!(
            search_id = search.id,
            origin = %search.origin,
            destination = %search.destination,
            "Search recorded"
        );

        Ok(search)
    }

    /// Retrieves a search by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no search has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_search(&self, id: i64) -> Result<Search, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Search not found", json!({ "id": id })))
    }

    /// Lists the most recent searches, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Search>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Deletes a search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no search has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_search(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Search not found", json!({ "id": id })));
        }

        tracing::info!(search_id = id, "Search deleted");
        Ok(())
    }

    /// Counts stored searches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks storage connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Label of the storage backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    /// The provider catalog, in display order.
    pub fn providers(&self) -> &'static [Provider] {
        catalog::list()
    }

    /// Builds link-outs for a stored search against the built-in catalog.
    pub fn links_for(&self, search: &Search) -> Vec<LinkOut<'static>> {
        build_links(&SearchCriteria::from(search), catalog::list())
    }
}
