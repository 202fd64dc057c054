//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`TokenAuthenticator`], [`IdentityResolver`]) are called by
//! inbound adapters. Driven ports ([`TokenVerifier`], [`IdentityRecordSource`])
//! are implemented by outbound adapters that talk to the identity provider.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_record_source;
mod identity_resolver;
mod token_authenticator;
mod token_verifier;

#[cfg(test)]
pub use identity_record_source::MockIdentityRecordSource;
pub use identity_record_source::{IdentityRecordError, IdentityRecordSource};
pub use identity_resolver::IdentityResolver;
pub use token_authenticator::TokenAuthenticator;
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::{TokenVerificationError, TokenVerifier, VerifiedToken};
