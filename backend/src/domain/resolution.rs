//! Identity profile resolution service.
//!
//! Implements the [`IdentityResolver`] driving port by fetching the provider
//! record for a verified subject and normalising it into [`IdentityInfo`].
//! A subject the provider cannot resolve is treated as an authentication
//! integrity problem rather than a missing resource.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::ports::{IdentityRecordError, IdentityRecordSource, IdentityResolver};
use crate::domain::{Error, IdentityInfo};

/// Message returned when resolution is attempted without a subject.
pub const MISSING_SUBJECT_MESSAGE: &str = "verified subject id is missing";

/// Resolution service implementing [`IdentityResolver`].
#[derive(Clone)]
pub struct IdentityInfoService<R> {
    records: Arc<R>,
}

impl<R> IdentityInfoService<R> {
    /// Create a service backed by `records`.
    pub fn new(records: Arc<R>) -> Self {
        Self { records }
    }
}

impl<R> IdentityInfoService<R>
where
    R: IdentityRecordSource,
{
    fn map_record_error(subject_id: &str, err: IdentityRecordError) -> Error {
        if err.is_provider_reported() {
            warn!(
                subject_id,
                provider_error = err.variant_name(),
                error = %err,
                "identity provider could not resolve subject"
            );
            Error::authentication(format!("identity could not be resolved: {err}")).with_cause(err)
        } else {
            error!(
                subject_id,
                provider_error = err.variant_name(),
                error = %err,
                "identity record lookup failed"
            );
            Error::authentication(format!("identity lookup failed: {err}")).with_cause(err)
        }
    }
}

#[async_trait]
impl<R> IdentityResolver for IdentityInfoService<R>
where
    R: IdentityRecordSource,
{
    async fn resolve(&self, subject_id: Option<&str>) -> Result<IdentityInfo, Error> {
        let Some(subject) = subject_id.filter(|value| !value.trim().is_empty()) else {
            error!("identity resolution reached without a verified subject");
            return Err(Error::authentication(MISSING_SUBJECT_MESSAGE));
        };

        let record = self
            .records
            .get_user_record(subject)
            .await
            .map_err(|err| Self::map_record_error(subject, err))?;

        let info = IdentityInfo::from_record(subject, record);
        debug!(subject_id = subject, provider = %info.provider, "identity resolved");
        Ok(info)
    }
}

#[cfg(test)]
#[path = "resolution_tests.rs"]
mod tests;
