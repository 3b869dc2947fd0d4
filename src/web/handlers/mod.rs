//! HTML template rendering handlers.

mod home;
mod searches;

pub use home::home_handler;
pub use searches::{create_search_form_handler, delete_search_form_handler, search_page_handler};
