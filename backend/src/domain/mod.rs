//! Domain primitives, ports, and services.
//!
//! Purpose: verify externally issued identity tokens, resolve verified
//! subjects into normalised profiles, and classify every failure into the
//! closed [`ErrorKind`] taxonomy. Keep this module free of transport and
//! provider SDK types.
//!
//! Public surface:
//! - Error / ErrorKind: classified domain failure with optional cause.
//! - VerifiedIdentity, IdentityInfo, IdentityRecord: identity data.
//! - TokenVerificationService: verifies tokens through a `TokenVerifier`.
//! - IdentityInfoService: resolves profiles through an `IdentityRecordSource`.
//! - token_prefix: log-safe credential redaction.

pub mod error;
pub mod identity;
pub mod ports;
pub mod redaction;
pub mod resolution;
pub mod verification;

pub use self::error::{Error, ErrorCause, ErrorKind, ErrorValidationError};
pub use self::identity::{
    IdentityInfo, IdentityRecord, IdentityValidationError, LinkedProvider, UNKNOWN_PROVIDER,
    VerifiedIdentity,
};
pub use self::redaction::{TOKEN_PREFIX_CHARS, token_prefix};
pub use self::resolution::{IdentityInfoService, MISSING_SUBJECT_MESSAGE};
pub use self::verification::{MISSING_TOKEN_MESSAGE, TokenVerificationService};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use backend::domain::{DomainResult, Error};
///
/// fn guard(allowed: bool) -> DomainResult<()> {
///     if allowed { Ok(()) } else { Err(Error::forbidden("nope")) }
/// }
/// assert!(guard(false).is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
