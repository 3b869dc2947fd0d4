//! DTOs for search endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::entities::{Search, SearchDraft};
use crate::domain::link_builder::LinkOut;

/// Default number of searches returned by `GET /api/searches`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Request to record a new search.
///
/// Every field is optional at the wire level; defaults and required-field
/// checks are applied by [`SearchDraft::normalize`]. `passengers` accepts a
/// number or a numeric string.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateSearchRequest {
    #[validate(length(max = 64))]
    pub origin: Option<String>,

    #[validate(length(max = 64))]
    pub destination: Option<String>,

    pub depart_start: Option<String>,

    pub depart_end: Option<String>,

    #[validate(length(max = 64))]
    pub cabin: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 99, message = "passengers must be between 1 and 99"))]
    pub passengers: Option<i64>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<CreateSearchRequest> for SearchDraft {
    fn from(req: CreateSearchRequest) -> Self {
        SearchDraft {
            origin: req.origin,
            destination: req.destination,
            depart_start: req.depart_start,
            depart_end: req.depart_end,
            cabin: req.cabin,
            // Out-of-range counts map to 0, which normalization rejects.
            passengers: req.passengers.map(|p| u32::try_from(p).unwrap_or(0)),
            notes: req.notes,
        }
    }
}

/// Query parameters for listing searches.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListSearchesParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: Option<i64>,
}

impl ListSearchesParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// A search together with its provider link-outs.
#[derive(Debug, Serialize)]
pub struct SearchWithLinksResponse {
    pub search: Search,
    pub links: Vec<LinkOut<'static>>,
}

/// Response containing recent searches.
#[derive(Debug, Serialize)]
pub struct SearchListResponse {
    pub searches: Vec<Search>,
}
