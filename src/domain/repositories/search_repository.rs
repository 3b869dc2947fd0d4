//! Repository trait for search record storage.

use crate::domain::entities::{NewSearch, Search};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recorded searches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSearchRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemorySearchRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_search.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Stores a new search and returns it with its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_search: NewSearch) -> Result<Search, AppError>;

    /// Finds a search by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Search))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Search>, AppError>;

    /// Lists the most recently created searches, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Search>, AppError>;

    /// Deletes a search.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored searches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend label for logs and health output.
    fn backend(&self) -> &'static str;
}
