//! Identity gateway library.
//!
//! Verifies externally issued identity tokens, resolves verified subjects into
//! normalised profiles, and classifies every failure into a closed domain
//! error taxonomy that transports map onto their own status codes. Paged read
//! queries are normalised by the companion `pagination` crate, re-exported
//! here for handlers.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use pagination::{QuerySpec, RawFilter, SortDirection, normalize};
