//! Shared HTTP adapter state.
//!
//! HTTP handlers and extractors accept this state via `actix_web::web::Data`
//! so they only depend on domain ports (use-cases) and remain testable
//! without I/O.

use std::sync::Arc;

use crate::domain::ports::{IdentityRecordSource, IdentityResolver, TokenAuthenticator, TokenVerifier};
use crate::domain::{IdentityInfoService, TokenVerificationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Verifies bearer tokens.
    pub authenticator: Arc<dyn TokenAuthenticator>,
    /// Resolves verified subjects into profiles.
    pub identities: Arc<dyn IdentityResolver>,
}

impl HttpState {
    /// Bundle already constructed driving ports.
    pub fn new(
        authenticator: Arc<dyn TokenAuthenticator>,
        identities: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            authenticator,
            identities,
        }
    }

    /// Wire the domain services over one provider adapter that implements
    /// both driven ports.
    pub fn from_provider<P>(provider: Arc<P>) -> Self
    where
        P: TokenVerifier + IdentityRecordSource + 'static,
    {
        Self::new(
            Arc::new(TokenVerificationService::new(Arc::clone(&provider))),
            Arc::new(IdentityInfoService::new(provider)),
        )
    }
}
