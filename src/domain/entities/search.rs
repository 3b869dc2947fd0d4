//! Search entity representing a recorded award search request.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;

/// Shape check for ISO calendar dates; calendar validity is checked by chrono.
static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Cabin used when the request leaves it blank.
pub const DEFAULT_CABIN: &str = "economy";

/// Passenger count used when the request leaves it blank.
pub const DEFAULT_PASSENGERS: u32 = 1;

/// A stored search with its identity and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Search {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub origin: String,
    pub destination: String,
    pub depart_start: Option<String>,
    pub depart_end: Option<String>,
    pub cabin: String,
    pub passengers: u32,
    pub notes: Option<String>,
}

impl Search {
    /// Builds a stored search from a validated payload.
    pub fn from_new(id: i64, created_at: DateTime<Utc>, new_search: NewSearch) -> Self {
        Self {
            id,
            created_at,
            origin: new_search.origin,
            destination: new_search.destination,
            depart_start: new_search.depart_start,
            depart_end: new_search.depart_end,
            cabin: new_search.cabin,
            passengers: new_search.passengers,
            notes: new_search.notes,
        }
    }

    /// `"JFK → LHR"` style label used in listings.
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    /// Human-readable departure window, empty when no dates were given.
    pub fn date_window(&self) -> String {
        match (self.depart_start.as_deref(), self.depart_end.as_deref()) {
            (Some(start), Some(end)) => format!("{start} – {end}"),
            (Some(start), None) => start.to_string(),
            (None, Some(end)) => format!("until {end}"),
            (None, None) => String::new(),
        }
    }
}

/// Validated, fully-defaulted input for creating a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSearch {
    pub origin: String,
    pub destination: String,
    pub depart_start: Option<String>,
    pub depart_end: Option<String>,
    pub cabin: String,
    pub passengers: u32,
    pub notes: Option<String>,
}

/// Raw search input as submitted by a form or JSON body.
///
/// Every field is optional; [`SearchDraft::normalize`] applies defaults and
/// rejects what cannot be defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub depart_start: Option<String>,
    pub depart_end: Option<String>,
    pub cabin: Option<String>,
    pub passengers: Option<u32>,
    pub notes: Option<String>,
}

/// Reasons a draft cannot become a [`NewSearch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchInputError {
    #[error("origin is required")]
    MissingOrigin,

    #[error("destination is required")]
    MissingDestination,

    #[error("passengers must be at least 1")]
    InvalidPassengers,

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

impl SearchInputError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingOrigin => "origin",
            Self::MissingDestination => "destination",
            Self::InvalidPassengers => "passengers",
            Self::InvalidDate { field, .. } => *field,
        }
    }
}

impl SearchDraft {
    /// Normalizes the draft into a [`NewSearch`].
    ///
    /// # Rules
    ///
    /// - `origin` / `destination`: trimmed and upper-cased, must not be empty
    /// - `depart_start` / `depart_end`: trimmed, blank means absent, otherwise `YYYY-MM-DD`
    /// - `cabin`: trimmed, blank means [`DEFAULT_CABIN`]
    /// - `passengers`: absent means [`DEFAULT_PASSENGERS`], zero is rejected
    /// - `notes`: trimmed, blank means absent
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchInputError`] encountered, in field order.
    pub fn normalize(self) -> Result<NewSearch, SearchInputError> {
        let origin = location_code(self.origin).ok_or(SearchInputError::MissingOrigin)?;
        let destination =
            location_code(self.destination).ok_or(SearchInputError::MissingDestination)?;

        let depart_start = iso_date("depart_start", self.depart_start)?;
        let depart_end = iso_date("depart_end", self.depart_end)?;

        let cabin = non_blank(self.cabin).unwrap_or_else(|| DEFAULT_CABIN.to_string());

        let passengers = match self.passengers {
            None => DEFAULT_PASSENGERS,
            Some(0) => return Err(SearchInputError::InvalidPassengers),
            Some(n) => n,
        };

        Ok(NewSearch {
            origin,
            destination,
            depart_start,
            depart_end,
            cabin,
            passengers,
            notes: non_blank(self.notes),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn location_code(value: Option<String>) -> Option<String> {
    non_blank(value).map(|v| v.to_uppercase())
}

fn iso_date(field: &'static str, value: Option<String>) -> Result<Option<String>, SearchInputError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };

    let valid = ISO_DATE_REGEX.is_match(&value)
        && NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_ok();

    if valid {
        Ok(Some(value))
    } else {
        Err(SearchInputError::InvalidDate { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(origin: &str, destination: &str) -> SearchDraft {
        SearchDraft {
            origin: Some(origin.to_string()),
            destination: Some(destination.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_applies_defaults() {
        let new_search = draft("jfk", "lhr").normalize().unwrap();

        assert_eq!(new_search.origin, "JFK");
        assert_eq!(new_search.destination, "LHR");
        assert_eq!(new_search.cabin, "economy");
        assert_eq!(new_search.passengers, 1);
        assert!(new_search.depart_start.is_none());
        assert!(new_search.depart_end.is_none());
        assert!(new_search.notes.is_none());
    }

    #[test]
    fn test_normalize_trims_codes() {
        let new_search = draft("  sfo ", "\tnrt\n").normalize().unwrap();
        assert_eq!(new_search.origin, "SFO");
        assert_eq!(new_search.destination, "NRT");
    }

    #[test]
    fn test_normalize_missing_origin() {
        let err = draft("   ", "LHR").normalize().unwrap_err();
        assert_eq!(err, SearchInputError::MissingOrigin);
        assert_eq!(err.field(), "origin");

        let err = SearchDraft::default().normalize().unwrap_err();
        assert_eq!(err, SearchInputError::MissingOrigin);
    }

    #[test]
    fn test_normalize_missing_destination() {
        let err = draft("JFK", "").normalize().unwrap_err();
        assert_eq!(err, SearchInputError::MissingDestination);
    }

    #[test]
    fn test_normalize_zero_passengers_rejected() {
        let mut d = draft("JFK", "LHR");
        d.passengers = Some(0);
        assert_eq!(d.normalize().unwrap_err(), SearchInputError::InvalidPassengers);
    }

    #[test]
    fn test_normalize_blank_optional_fields_become_absent() {
        let d = SearchDraft {
            depart_start: Some("".to_string()),
            depart_end: Some("  ".to_string()),
            cabin: Some(" ".to_string()),
            notes: Some("".to_string()),
            ..draft("JFK", "LHR")
        };
        let new_search = d.normalize().unwrap();

        assert!(new_search.depart_start.is_none());
        assert!(new_search.depart_end.is_none());
        assert_eq!(new_search.cabin, "economy");
        assert!(new_search.notes.is_none());
    }

    #[test]
    fn test_normalize_keeps_valid_dates_and_cabin() {
        let d = SearchDraft {
            depart_start: Some("2025-06-01".to_string()),
            depart_end: Some(" 2025-06-07 ".to_string()),
            cabin: Some("business".to_string()),
            passengers: Some(2),
            notes: Some(" anniversary trip ".to_string()),
            ..draft("JFK", "LHR")
        };
        let new_search = d.normalize().unwrap();

        assert_eq!(new_search.depart_start.as_deref(), Some("2025-06-01"));
        assert_eq!(new_search.depart_end.as_deref(), Some("2025-06-07"));
        assert_eq!(new_search.cabin, "business");
        assert_eq!(new_search.passengers, 2);
        assert_eq!(new_search.notes.as_deref(), Some("anniversary trip"));
    }

    #[test]
    fn test_normalize_rejects_malformed_dates() {
        for bad in ["2025-6-1", "06/01/2025", "2025-02-30", "tomorrow"] {
            let d = SearchDraft {
                depart_start: Some(bad.to_string()),
                ..draft("JFK", "LHR")
            };
            let err = d.normalize().unwrap_err();
            assert_eq!(err.field(), "depart_start", "{bad}");
        }

        let d = SearchDraft {
            depart_end: Some("2025-13-01".to_string()),
            ..draft("JFK", "LHR")
        };
        assert!(matches!(
            d.normalize().unwrap_err(),
            SearchInputError::InvalidDate { field: "depart_end", .. }
        ));
    }

    #[test]
    fn test_date_window_formats() {
        let new_search = SearchDraft {
            depart_start: Some("2025-06-01".to_string()),
            depart_end: Some("2025-06-07".to_string()),
            ..draft("JFK", "LHR")
        }
        .normalize()
        .unwrap();
        let search = Search::from_new(1, Utc::now(), new_search);

        assert_eq!(search.route(), "JFK → LHR");
        assert_eq!(search.date_window(), "2025-06-01 – 2025-06-07");
    }

    #[test]
    fn test_search_serializes_fields() {
        let new_search = draft("JFK", "LHR").normalize().unwrap();
        let search = Search::from_new(7, Utc::now(), new_search);
        let json = serde_json::to_value(&search).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["origin"], "JFK");
        assert_eq!(json["cabin"], "economy");
        assert_eq!(json["passengers"], 1);
        assert!(json["depart_start"].is_null());
        assert!(json["created_at"].is_string());
    }
}
