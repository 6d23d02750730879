use crate::models::{BearerToken, Engine, MatchRequest, MatchResponse};
use crate::services::{ApiClient, ApiError};
use std::sync::Arc;
use thiserror::Error;
use tracing::Instrument;
use validator::Validate;

pub const MATCH_PATH: &str = "/api/ai-matching/match";

/// Errors returned by a match call
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid match request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Sends resume-to-job match requests to the matching service
///
/// Every call issues exactly one request: no retries, no caching, no
/// deduplication. Concurrent calls are independent of each other.
///
/// No timeout is applied here. Unless the injected [`ApiClient`] was built
/// with `timeout_secs`, a call waits as long as the transport does.
#[derive(Debug, Clone)]
pub struct MatchRequestor {
    api: Arc<ApiClient>,
}

impl MatchRequestor {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Match the user's resume against a job
    ///
    /// # Arguments
    /// * `token` - Bearer credential, forwarded as-is
    /// * `user_id` - Candidate whose resume is compared
    /// * `job_id` - Job or internship to compare against
    /// * `engine` - Defaults to [`Engine::Gemini`]
    /// * `debug` - Defaults to `false`
    ///
    /// # Returns
    /// The response body, unmodified
    pub async fn match_resume_to_job(
        &self,
        token: &BearerToken,
        user_id: &str,
        job_id: &str,
        engine: Option<Engine>,
        debug: Option<bool>,
    ) -> Result<MatchResponse, MatchError> {
        let request = MatchRequest::new(user_id, job_id)
            .with_engine(engine.unwrap_or_default())
            .with_debug(debug.unwrap_or(false));

        self.send(token, &request).await
    }

    /// Send a prepared match request
    pub async fn send(
        &self,
        token: &BearerToken,
        request: &MatchRequest,
    ) -> Result<MatchResponse, MatchError> {
        request
            .validate()
            .map_err(|errors| MatchError::InvalidRequest(errors.to_string()))?;

        let span = tracing::debug_span!(
            "match_resume_to_job",
            request_id = %uuid::Uuid::new_v4(),
            engine = %request.engine,
            debug = request.debug,
        );

        async {
            tracing::debug!("Requesting match for user {} against job {}", request.user_id, request.job_id);
            let response = self.api.post_json(MATCH_PATH, Some(token), request).await?;
            tracing::debug!("Match completed for job {}", request.job_id);
            Ok::<_, MatchError>(response)
        }
        .instrument(span)
        .await
    }
}
