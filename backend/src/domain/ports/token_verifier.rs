//! Driven port for the external token verification provider.
//!
//! The domain owns the result shape and the failure vocabulary so the
//! verification service never sees provider SDK types. Adapters translate
//! their transport and payload errors into [`TokenVerificationError`].

use async_trait::async_trait;

use super::define_port_error;

/// Claims the provider extracted from an accepted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Subject identifier the provider assigned to the principal.
    pub subject_id: String,
}

impl VerifiedToken {
    /// Build a result for `subject_id`.
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
        }
    }
}

define_port_error! {
    /// Errors surfaced while asking the provider to verify a token.
    pub enum TokenVerificationError {
        /// Signature or issuer checks failed.
        InvalidSignature { message: String } =>
            "token signature rejected: {message}",
        /// Token lifetime has elapsed.
        Expired { message: String } =>
            "token expired: {message}",
        /// Token or its principal was revoked or disabled.
        Revoked { message: String } =>
            "token revoked: {message}",
        /// Token is structurally invalid.
        Malformed { message: String } =>
            "token malformed: {message}",
        /// Provider could not be reached or failed internally.
        Unavailable { message: String } =>
            "token provider unavailable: {message}",
        /// Provider response could not be decoded.
        Decode { message: String } =>
            "token provider response decode failed: {message}",
    }
}

impl TokenVerificationError {
    /// Return whether the provider itself judged the token unacceptable.
    ///
    /// `false` means the call failed for reasons unrelated to the token.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignature { .. }
                | Self::Expired { .. }
                | Self::Revoked { .. }
                | Self::Malformed { .. }
        )
    }
}

/// Port for verifying raw identity tokens with the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `raw_token` and return the claims the provider accepted.
    async fn verify_token(&self, raw_token: &str) -> Result<VerifiedToken, TokenVerificationError>;
}
