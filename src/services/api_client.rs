use crate::config::ApiSettings;
use crate::models::BearerToken;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the job board API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any non-success status. Auth failures, missing resources and server
    /// errors all land here.
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Status code of a non-success response, if that is what failed
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Transport(_) | ApiError::InvalidUrl { .. } => None,
        }
    }
}

/// HTTP client for the job board API
///
/// Built once at startup and shared by every requestor. Relative API paths
/// are resolved against the configured base URL instead of any ambient
/// routing policy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base_url = parse_url(settings.base_url.trim())?;

        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path against the base URL
    ///
    /// Absolute `http(s)://` URLs pass through untouched. Anything else is
    /// appended to the base URL, keeping whatever path prefix the base has.
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        parse_url(&format!("{}/{}", base, path))
    }

    /// POST a JSON body and return the parsed JSON response
    pub async fn post_json<B>(
        &self,
        path: &str,
        token: Option<&BearerToken>,
        body: &B,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        tracing::debug!("POST {}", url);

        let request = with_auth(self.client.post(url), token).json(body);
        execute(request).await
    }

    /// GET a resource and return the parsed JSON response
    pub async fn get_json(
        &self,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Result<Value, ApiError> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);

        let request = with_auth(self.client.get(url), token);
        execute(request).await
    }
}

fn parse_url(url: &str) -> Result<Url, ApiError> {
    Url::parse(url).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn with_auth(request: RequestBuilder, token: Option<&BearerToken>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token.as_str()),
        None => request,
    }
}

/// Send once. The body of a failed response is never read.
async fn execute(request: RequestBuilder) -> Result<Value, ApiError> {
    let response = request.send().await?;
    let status = response.status();

    tracing::debug!("API responded with {}", status);

    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiSettings {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let api = client("http://localhost:5000");
        let url = api.resolve("/api/jobs").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/jobs");
    }

    #[test]
    fn test_resolve_keeps_base_prefix() {
        let api = client("https://jobs.example.com/backend/");
        let url = api.resolve("/api/ai-matching/match").unwrap();
        assert_eq!(url.as_str(), "https://jobs.example.com/backend/api/ai-matching/match");
    }

    #[test]
    fn test_resolve_absolute_passthrough() {
        let api = client("http://localhost:5000");
        let url = api.resolve("https://other.example.com/api/jobs").unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/api/jobs");
    }

    #[test]
    fn test_resolve_absolute_scheme_is_case_insensitive() {
        let api = client("http://localhost:5000/prefix");
        let url = api.resolve("HTTPS://other.example.com/api/jobs").unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/api/jobs");
    }

    #[test]
    fn test_resolve_non_http_scheme_is_joined() {
        let api = client("http://localhost:5000");
        let url = api.resolve("api:jobs").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api:jobs");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = ApiClient::new(&ApiSettings {
            base_url: "not a url".to_string(),
            timeout_secs: Some(5),
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn test_status_error_message_includes_code() {
        let err = ApiError::Status(404);
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_transport_error_has_no_status() {
        let api = client("http://127.0.0.1:1");
        let err = api.get_json("/api/jobs", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
