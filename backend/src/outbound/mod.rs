//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators that convert between domain types and
//! provider-specific representations. They contain no business logic:
//! classification into domain error kinds happens in the domain services.

pub mod identity_toolkit;
