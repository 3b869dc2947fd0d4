//! Browser-facing HTML pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
