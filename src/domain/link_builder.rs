//! Link-out generation for a recorded search.
//!
//! Every provider gets the same human-readable hint appended as a URL
//! fragment. Providers never read the fragment; it only survives in the
//! address bar so the user can copy the search parameters by hand.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::domain::catalog::Provider;
use crate::domain::entities::Search;

/// Bytes left unescaped in the hint fragment: unreserved characters plus `/`.
const HINT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Search parameters used to build link-outs.
///
/// Values are expected to be normalized already (see
/// [`crate::domain::entities::SearchDraft::normalize`]); nothing is validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub depart_start: Option<String>,
    pub depart_end: Option<String>,
    pub cabin: String,
    pub passengers: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            depart_start: None,
            depart_end: None,
            cabin: "economy".to_string(),
            passengers: 1,
        }
    }
}

impl From<&Search> for SearchCriteria {
    fn from(search: &Search) -> Self {
        Self {
            origin: search.origin.clone(),
            destination: search.destination.clone(),
            depart_start: search.depart_start.clone(),
            depart_end: search.depart_end.clone(),
            cabin: search.cabin.clone(),
            passengers: search.passengers,
        }
    }
}

/// A provider link annotated with the search hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOut<'a> {
    pub provider: &'a Provider,
    pub url: String,
    pub hint: String,
}

/// Formats the copy/paste hint for a search.
///
/// Format: `{origin}-{destination} {start}[..{end}] {cabin} x{passengers}`,
/// trimmed at both ends. A missing start date leaves its slot empty, so the
/// hint then carries two consecutive spaces; existing users copy this format
/// as-is, so it is kept.
pub fn build_hint(criteria: &SearchCriteria) -> String {
    let start = criteria.depart_start.as_deref().unwrap_or("");
    let range_end = match criteria.depart_end.as_deref() {
        Some(end) if !end.is_empty() => format!("..{end}"),
        _ => String::new(),
    };

    format!(
        "{}-{} {}{} {} x{}",
        criteria.origin, criteria.destination, start, range_end, criteria.cabin, criteria.passengers
    )
    .trim()
    .to_string()
}

/// Builds one link-out per provider, preserving catalog order.
pub fn build_links<'a>(criteria: &SearchCriteria, providers: &'a [Provider]) -> Vec<LinkOut<'a>> {
    let hint = build_hint(criteria);
    let encoded = utf8_percent_encode(&hint, HINT_ENCODE_SET).to_string();

    providers
        .iter()
        .map(|provider| LinkOut {
            provider,
            url: annotate_url(provider.url, &hint, &encoded),
            hint: hint.clone(),
        })
        .collect()
}

fn annotate_url(base: &str, hint: &str, encoded: &str) -> String {
    if hint.is_empty() {
        base.to_string()
    } else {
        format!("{base}#{encoded}")
    }
}
