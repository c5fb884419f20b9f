//! Campaign domain types.
//!
//! - **Request**: the business and campaign parameters collected from the user
//! - **Artifact**: generated markdown, keyed by kind

mod artifact;
mod request;

pub use artifact::{ArtifactKind, Artifacts, GeneratedArtifact};
pub use request::{CampaignRequest, DEFAULT_TONE, MessageRequest};
