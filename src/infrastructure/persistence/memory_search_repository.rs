//! In-process search repository used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewSearch, Search};
use crate::domain::repositories::SearchRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    last_id: i64,
    searches: BTreeMap<i64, Search>,
}

/// A search repository backed by an in-memory map.
///
/// Ids are assigned sequentially starting at 1 and never reused, matching the
/// behavior of the `BIGSERIAL` column in PostgreSQL. Contents are lost when the
/// process exits.
///
/// # Use Cases
///
/// - Local development without PostgreSQL
/// - Handler tests
#[derive(Default)]
pub struct InMemorySearchRepository {
    store: RwLock<Store>,
}

impl InMemorySearchRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory search storage");
        Self::default()
    }
}

#[async_trait]
impl SearchRepository for InMemorySearchRepository {
    async fn create(&self, new_search: NewSearch) -> Result<Search, AppError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let search = Search::from_new(store.last_id, Utc::now(), new_search);
        store.searches.insert(search.id, search.clone());

        Ok(search)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Search>, AppError> {
        Ok(self.store.read().await.searches.get(&id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Search>, AppError> {
        let take = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .store
            .read()
            .await
            .searches
            .values()
            .rev()
            .take(take)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.store.write().await.searches.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.searches.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_search(origin: &str) -> NewSearch {
        NewSearch {
            origin: origin.to_string(),
            destination: "LHR".to_string(),
            depart_start: None,
            depart_end: None,
            cabin: "economy".to_string(),
            passengers: 1,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemorySearchRepository::new();

        let first = repo.create(new_search("JFK")).await.unwrap();
        let second = repo.create(new_search("EWR")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first_and_limited() {
        let repo = InMemorySearchRepository::new();
        for origin in ["AAA", "BBB", "CCC"] {
            repo.create(new_search(origin)).await.unwrap();
        }

        let recent = repo.list_recent(2).await.unwrap();
        let origins: Vec<&str> = recent.iter().map(|s| s.origin.as_str()).collect();
        assert_eq!(origins, vec!["CCC", "BBB"]);

        assert!(repo.list_recent(0).await.unwrap().is_empty());
        assert!(repo.list_recent(-5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_does_not_reuse_ids() {
        let repo = InMemorySearchRepository::new();
        let first = repo.create(new_search("JFK")).await.unwrap();

        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());

        let next = repo.create(new_search("EWR")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_stored_fields() {
        let repo = InMemorySearchRepository::new();
        let created = repo.create(new_search("JFK")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(repo.backend(), "memory");
        assert!(repo.ping().await.is_ok());
    }
}
