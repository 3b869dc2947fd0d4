//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`SearchRepository`] - Search record storage

pub mod search_repository;

pub use search_repository::SearchRepository;

#[cfg(test)]
pub use search_repository::MockSearchRepository;
