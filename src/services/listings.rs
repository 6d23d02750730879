use crate::models::{BearerToken, ListingPayload};
use crate::services::api_client::{ApiClient, ApiError};
use std::fmt;
use std::sync::Arc;

/// Which listing collection to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Jobs,
    Internships,
}

impl ListingKind {
    pub fn path(&self) -> &'static str {
        match self {
            ListingKind::Jobs => "/api/jobs",
            ListingKind::Internships => "/api/internships",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Jobs => f.write_str("jobs"),
            ListingKind::Internships => f.write_str("internships"),
        }
    }
}

/// Client for the job and internship listings
///
/// Listings are where `jobId` values for a match come from; use
/// [`crate::models::listing_ids`] to pull them out of a payload.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    api: Arc<ApiClient>,
}

impl ListingsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(
        &self,
        kind: ListingKind,
        token: Option<&BearerToken>,
    ) -> Result<ListingPayload, ApiError> {
        let payload = self.api.get_json(kind.path(), token).await?;
        tracing::debug!("Fetched {} listing", kind);
        Ok(payload)
    }

    pub async fn jobs(&self, token: Option<&BearerToken>) -> Result<ListingPayload, ApiError> {
        self.fetch(ListingKind::Jobs, token).await
    }

    pub async fn internships(
        &self,
        token: Option<&BearerToken>,
    ) -> Result<ListingPayload, ApiError> {
        self.fetch(ListingKind::Internships, token).await
    }
}
