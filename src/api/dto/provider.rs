//! DTOs for the provider catalog endpoint.

use serde::Serialize;

use crate::domain::catalog::Provider;

/// Response containing the full provider catalog in display order.
#[derive(Debug, Serialize)]
pub struct ProviderListResponse {
    pub providers: &'static [Provider],
}
