//! Driving port for turning a verified subject into a profile.

use async_trait::async_trait;

use crate::domain::{Error, IdentityInfo};

/// Domain use-case port for identity profile resolution.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Load and normalise the profile for `subject_id`.
    async fn resolve(&self, subject_id: Option<&str>) -> Result<IdentityInfo, Error>;
}
