use crate::models::{BearerToken, ResumeExtraction};
use crate::services::api_client::{ApiClient, ApiError};
use std::sync::Arc;

pub const EXTRACT_CURRENT_PATH: &str = "/api/resume/extract-current";

/// Client for the resume endpoints
#[derive(Debug, Clone)]
pub struct ResumeClient {
    api: Arc<ApiClient>,
}

impl ResumeClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Ask the backend to extract the caller's current resume
    pub async fn extract_current(
        &self,
        token: &BearerToken,
    ) -> Result<ResumeExtraction, ApiError> {
        self.api
            .post_json(EXTRACT_CURRENT_PATH, Some(token), &serde_json::json!({}))
            .await
    }
}
