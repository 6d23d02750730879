// Match request orchestration
pub mod requestor;

pub use requestor::{MatchError, MatchRequestor, MATCH_PATH};
