//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Search`] - A recorded flight search
//!
//! # Design Pattern
//!
//! Creation goes through two stages:
//! - [`SearchDraft`] - Raw, loosely-typed input from a form or JSON body
//! - [`NewSearch`] - Normalized and validated input, ready to be stored

pub mod search;

pub use search::{NewSearch, Search, SearchDraft, SearchInputError};
