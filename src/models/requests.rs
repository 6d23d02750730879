use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Engine, OutputFormat};

/// Request body for `POST /api/ai-matching/match`
///
/// ```json
/// {
///   "userId": "string",
///   "jobId": "string",
///   "engine": "gemini|fallback",
///   "outputFormat": "json-compare",
///   "debug": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(default)]
    pub engine: Engine,
    #[serde(rename = "outputFormat", default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub debug: bool,
}

impl MatchRequest {
    pub fn new(user_id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            job_id: job_id.into(),
            engine: Engine::default(),
            output_format: OutputFormat::JsonCompare,
            debug: false,
        }
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
