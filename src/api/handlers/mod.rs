//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod providers;
pub mod searches;

pub use health::health_handler;
pub use providers::provider_list_handler;
pub use searches::{
    create_search_handler, delete_search_handler, get_search_handler, list_searches_handler,
};
