//! Driving port for establishing who presented a token.
//!
//! Inbound adapters call this port with whatever credential they extracted
//! (possibly nothing) and receive either a verified identity or an
//! authentication error. They never see provider types.

use async_trait::async_trait;

use crate::domain::{Error, VerifiedIdentity};

/// Domain use-case port for token verification.
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    /// Verify `token`, failing with an authentication error when it is
    /// absent, empty, or rejected.
    async fn verify(&self, token: Option<&str>) -> Result<VerifiedIdentity, Error>;
}
