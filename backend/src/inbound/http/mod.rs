//! HTTP inbound adapter helpers.
//!
//! Routing lives with the application that embeds this crate; this module
//! only supplies the pieces handlers share: domain error mapping, the
//! bearer-token identity extractor, and the port bundle they read from.

pub mod auth;
pub mod error;
pub mod state;

pub use auth::{CurrentIdentity, bearer_token};
pub use error::{AUTHENTICATION_FAILED_MESSAGE, ApiResult};
pub use state::HttpState;
