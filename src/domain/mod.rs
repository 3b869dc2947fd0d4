//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`catalog`] - Built-in provider catalog
//! - [`link_builder`] - Link-out generation from search criteria
//! - [`entities`] - Search records and their input normalization
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - [`link_builder::build_links`] is pure: no I/O, no clock, no shared state
//! - Repository traits define contracts implemented by infrastructure layer

pub mod catalog;
pub mod entities;
pub mod link_builder;
pub mod repositories;
