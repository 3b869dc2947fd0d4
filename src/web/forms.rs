//! HTML form payloads.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::SearchDraft;

/// The "new search" form on the home page.
///
/// Browsers submit untouched inputs as empty strings; they are read as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default)]
    #[validate(length(max = 64))]
    pub origin: String,

    #[serde(default)]
    #[validate(length(max = 64))]
    pub destination: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub depart_start: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub depart_end: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 64))]
    pub cabin: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(range(min = 1, max = 99, message = "passengers must be between 1 and 99"))]
    pub passengers: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<SearchForm> for SearchDraft {
    fn from(form: SearchForm) -> Self {
        SearchDraft {
            origin: Some(form.origin),
            destination: Some(form.destination),
            depart_start: form.depart_start,
            depart_end: form.depart_end,
            cabin: form.cabin,
            passengers: form.passengers.map(|p| u32::try_from(p).unwrap_or(0)),
            notes: form.notes,
        }
    }
}
