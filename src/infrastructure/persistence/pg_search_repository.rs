//! PostgreSQL implementation of search repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSearch, Search};
use crate::domain::repositories::SearchRepository;
use crate::error::AppError;

const SEARCH_COLUMNS: &str =
    "id, created_at, origin, destination, depart_start, depart_end, cabin, passengers, notes";

/// Row shape of the `searches` table.
#[derive(Debug, sqlx::FromRow)]
struct SearchRow {
    id: i64,
    created_at: DateTime<Utc>,
    origin: String,
    destination: String,
    depart_start: Option<String>,
    depart_end: Option<String>,
    cabin: String,
    passengers: i32,
    notes: Option<String>,
}

impl TryFrom<SearchRow> for Search {
    type Error = AppError;

    fn try_from(row: SearchRow) -> Result<Self, Self::Error> {
        let passengers = u32::try_from(row.passengers).map_err(|_| {
            AppError::internal(
                "Corrupt search record",
                json!({ "id": row.id, "passengers": row.passengers }),
            )
        })?;

        Ok(Search {
            id: row.id,
            created_at: row.created_at,
            origin: row.origin,
            destination: row.destination,
            depart_start: row.depart_start,
            depart_end: row.depart_end,
            cabin: row.cabin,
            passengers,
            notes: row.notes,
        })
    }
}

/// PostgreSQL repository for search records.
///
/// Uses SQLx prepared statements with bound parameters.
pub struct PgSearchRepository {
    pool: Arc<PgPool>,
}

impl PgSearchRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchRepository for PgSearchRepository {
    async fn create(&self, new_search: NewSearch) -> Result<Search, AppError> {
        let passengers = i32::try_from(new_search.passengers).map_err(|_| {
            AppError::bad_request(
                "passengers is too large",
                json!({ "passengers": new_search.passengers }),
            )
        })?;

        let row: SearchRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO searches (origin, destination, depart_start, depart_end, cabin, passengers, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SEARCH_COLUMNS}
            "#
        ))
        .bind(&new_search.origin)
        .bind(&new_search.destination)
        .bind(&new_search.depart_start)
        .bind(&new_search.depart_end)
        .bind(&new_search.cabin)
        .bind(passengers)
        .bind(&new_search.notes)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Search>, AppError> {
        let row: Option<SearchRow> = sqlx::query_as(&format!(
            "SELECT {SEARCH_COLUMNS} FROM searches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Search::try_from).transpose()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Search>, AppError> {
        let rows: Vec<SearchRow> = sqlx::query_as(&format!(
            "SELECT {SEARCH_COLUMNS} FROM searches ORDER BY id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Search::try_from).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM searches WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM searches")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
