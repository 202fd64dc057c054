//! Identity Toolkit outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `TokenVerifier` and
//! `IdentityRecordSource` ports against the Identity Toolkit REST API.

mod dto;
mod http_client;

pub use http_client::{IdentityToolkitClient, IdentityToolkitClientError, IdentityToolkitCredentials};
