//! Driven port for fetching user records from the identity provider.

use async_trait::async_trait;

use crate::domain::IdentityRecord;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while loading a user record from the provider.
    pub enum IdentityRecordError {
        /// Provider has no record for the subject.
        NotFound { subject_id: String } =>
            "no identity record for subject {subject_id}",
        /// Provider refused the lookup.
        Rejected { message: String } =>
            "identity record lookup rejected: {message}",
        /// Provider could not be reached or failed internally.
        Unavailable { message: String } =>
            "identity provider unavailable: {message}",
        /// Provider response could not be decoded.
        Decode { message: String } =>
            "identity record decode failed: {message}",
    }
}

impl IdentityRecordError {
    /// Return whether the provider answered and reported the failure itself.
    pub fn is_provider_reported(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Rejected { .. })
    }
}

/// Port for looking up provider-held profile attributes by subject.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRecordSource: Send + Sync {
    /// Fetch the full user record for `subject_id`.
    async fn get_user_record(&self, subject_id: &str) -> Result<IdentityRecord, IdentityRecordError>;
}
