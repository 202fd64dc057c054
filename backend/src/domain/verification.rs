//! Token verification service.
//!
//! Implements the [`TokenAuthenticator`] driving port on top of a
//! [`TokenVerifier`] driven port. Every failure, whether the provider rejected
//! the token or the call itself broke, surfaces as
//! [`ErrorKind::Authentication`](crate::domain::ErrorKind::Authentication)
//! with the provider error kept as the cause.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{TokenAuthenticator, TokenVerificationError, TokenVerifier};
use crate::domain::{Error, VerifiedIdentity, token_prefix};

/// Message returned when no usable token was presented.
pub const MISSING_TOKEN_MESSAGE: &str = "identity token is invalid or missing";

/// Verification service implementing [`TokenAuthenticator`].
#[derive(Clone)]
pub struct TokenVerificationService<V> {
    verifier: Arc<V>,
}

impl<V> TokenVerificationService<V> {
    /// Create a service backed by `verifier`.
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }
}

impl<V> TokenVerificationService<V>
where
    V: TokenVerifier,
{
    fn map_verification_error(prefix: &str, err: TokenVerificationError) -> Error {
        if err.is_rejection() {
            warn!(
                token_prefix = prefix,
                provider_error = err.variant_name(),
                error = %err,
                "identity token rejected by provider"
            );
            Error::authentication(format!("identity token is invalid: {err}")).with_cause(err)
        } else {
            error!(
                token_prefix = prefix,
                provider_error = err.variant_name(),
                error = %err,
                "identity token verification failed"
            );
            Error::authentication(format!("identity token could not be verified: {err}"))
                .with_cause(err)
        }
    }
}

#[async_trait]
impl<V> TokenAuthenticator for TokenVerificationService<V>
where
    V: TokenVerifier,
{
    async fn verify(&self, token: Option<&str>) -> Result<VerifiedIdentity, Error> {
        let Some(raw_token) = token.filter(|value| !value.trim().is_empty()) else {
            warn!("identity token missing");
            return Err(Error::authentication(MISSING_TOKEN_MESSAGE));
        };

        let prefix = token_prefix(raw_token);
        info!(token_prefix = prefix, "verifying identity token");

        let verified = self
            .verifier
            .verify_token(raw_token)
            .await
            .map_err(|err| Self::map_verification_error(prefix, err))?;

        VerifiedIdentity::try_new(verified.subject_id).map_err(|err| {
            error!(token_prefix = prefix, "provider accepted token without a subject");
            Error::authentication(format!("identity token could not be verified: {err}"))
                .with_cause(err)
        })
    }
}

#[cfg(test)]
#[path = "verification_tests.rs"]
mod tests;
