//! Job board matching client
//!
//! Sends resume-to-job match requests to the job board's matching service,
//! and reads the resume and listing endpoints that feed those requests.
//! Every call goes through one explicitly configured [`ApiClient`] and takes
//! the caller's bearer token as an argument.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchError, MatchRequestor};
pub use models::{BearerToken, Engine, MatchRequest, MatchResponse, OutputFormat};
pub use services::{ApiClient, ApiError, ListingsClient, ResumeClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let req = MatchRequest::new("u1", "j1");
        assert_eq!(req.engine, Engine::Gemini);
    }
}
