//! Bearer-token authentication for HTTP handlers.
//!
//! Handlers that need the caller's identity take [`CurrentIdentity`] as an
//! argument. The extractor reads the `Authorization` header, verifies the
//! token, and resolves the profile through the driving ports held in
//! [`HttpState`]. Any failure short-circuits with a 401 response.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use tracing::error;
use zeroize::Zeroizing;

use super::state::HttpState;
use crate::domain::{Error, IdentityInfo};

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is absent, not valid ASCII, or uses another scheme.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
}

/// Profile of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentIdentity(IdentityInfo);

impl CurrentIdentity {
    /// Borrow the resolved profile.
    pub fn info(&self) -> &IdentityInfo {
        &self.0
    }

    /// Take ownership of the resolved profile.
    pub fn into_inner(self) -> IdentityInfo {
        self.0
    }
}

impl FromRequest for CurrentIdentity {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let token = bearer_token(req).map(|raw| Zeroizing::new(raw.to_owned()));

        Box::pin(async move {
            let Some(state) = state else {
                error!("HttpState missing from app data; cannot authenticate request");
                return Err(Error::authentication("identity services are not configured"));
            };

            let identity = state
                .authenticator
                .verify(token.as_ref().map(|raw| raw.as_str()))
                .await?;
            let info = state
                .identities
                .resolve(Some(identity.subject_id()))
                .await?;
            Ok(Self(info))
        })
    }
}
