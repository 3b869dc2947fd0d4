//! Search repository implementations.
//!
//! # Repositories
//!
//! - [`PgSearchRepository`] - PostgreSQL storage via SQLx
//! - [`InMemorySearchRepository`] - Process-local storage when no database is configured

pub mod memory_search_repository;
pub mod pg_search_repository;

pub use memory_search_repository::InMemorySearchRepository;
pub use pg_search_repository::PgSearchRepository;
