// Service exports
pub mod api_client;
pub mod listings;
pub mod resume;

pub use api_client::{ApiClient, ApiError};
pub use listings::{ListingKind, ListingsClient};
pub use resume::ResumeClient;
