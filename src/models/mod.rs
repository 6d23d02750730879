// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BearerToken, Engine, OutputFormat, ParseEngineError};
pub use requests::MatchRequest;
pub use responses::{listing_ids, ListingPayload, MatchResponse, ResumeExtraction};
