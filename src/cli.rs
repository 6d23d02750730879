use crate::config::Settings;
use crate::core::{MatchError, MatchRequestor};
use crate::models::{listing_ids, BearerToken, Engine};
use crate::services::{ApiClient, ApiError, ListingKind, ListingsClient, ResumeClient};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("No bearer token: pass --token or set auth.token")]
    MissingToken,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

#[derive(Debug, Parser)]
#[command(name = "jobboard-match", version, about = "Resume-to-job matching against the job board API")]
pub struct Cli {
    /// Configuration file, instead of config/default and config/local
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token; overrides auth.token
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare a user's resume with a job
    Match {
        #[arg(long = "user")]
        user_id: String,
        #[arg(long = "job")]
        job_id: String,
        /// gemini or fallback
        #[arg(long)]
        engine: Option<Engine>,
        #[arg(long)]
        debug: bool,
    },
    /// Extract the current resume of the token's owner
    Resume,
    /// List jobs
    Jobs {
        /// Print only listing ids
        #[arg(long)]
        ids: bool,
    },
    /// List internships
    Internships {
        #[arg(long)]
        ids: bool,
    },
}

impl Cli {
    pub fn load_settings(&self) -> Result<Settings, CliError> {
        let settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };
        Ok(settings)
    }

    /// Command-line token first, then the configured one
    fn token(&self, settings: &Settings) -> Option<BearerToken> {
        self.token
            .clone()
            .or_else(|| settings.auth.token.clone())
            .filter(|t| !t.is_empty())
            .map(BearerToken::from)
    }
}

/// Run one command and return the JSON to print
pub async fn run(cli: &Cli, settings: &Settings) -> Result<Value, CliError> {
    let api = Arc::new(ApiClient::new(&settings.api)?);
    let token = cli.token(settings);

    tracing::info!("Using API at {}", api.base_url());

    match &cli.command {
        Command::Match { user_id, job_id, engine, debug } => {
            let token = token.ok_or(CliError::MissingToken)?;
            let requestor = MatchRequestor::new(api);
            let result = requestor
                .match_resume_to_job(&token, user_id, job_id, *engine, Some(*debug))
                .await?;
            Ok(result)
        }
        Command::Resume => {
            let token = token.ok_or(CliError::MissingToken)?;
            Ok(ResumeClient::new(api).extract_current(&token).await?)
        }
        Command::Jobs { ids } => list(api, ListingKind::Jobs, token.as_ref(), *ids).await,
        Command::Internships { ids } => {
            list(api, ListingKind::Internships, token.as_ref(), *ids).await
        }
    }
}

async fn list(
    api: Arc<ApiClient>,
    kind: ListingKind,
    token: Option<&BearerToken>,
    ids_only: bool,
) -> Result<Value, CliError> {
    let payload = ListingsClient::new(api).fetch(kind, token).await?;

    if ids_only {
        let ids = listing_ids(&payload);
        tracing::info!("Found {} {}", ids.len(), kind);
        return Ok(Value::from(ids));
    }

    Ok(payload)
}
