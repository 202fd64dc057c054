//! Reqwest-backed Identity Toolkit adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into domain records. It makes a
//! single attempt per call; retry policy belongs to callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use thiserror::Error;

use super::dto::{
    IdTokenLookupDto, LocalIdLookupDto, LookupResponseDto, ProviderErrorEnvelopeDto,
};
use crate::config::{IdentityProviderSettings, SettingsError};
use crate::domain::IdentityRecord;
use crate::domain::ports::{
    IdentityRecordError, IdentityRecordSource, TokenVerificationError, TokenVerifier,
    VerifiedToken,
};

const LOOKUP_PATH: &str = "v1/accounts:lookup";
const DEFAULT_USER_AGENT: &str = "identity-gateway/0.1";

/// Provider reasons that describe the submitted token rather than the call.
const MALFORMED_TOKEN_REASONS: &[&str] = &["INVALID_ARGUMENT", "MISSING_ID_TOKEN"];

/// Credentials attached to provider requests.
#[derive(Debug, Clone, Default)]
pub struct IdentityToolkitCredentials {
    /// API key appended as the `key` query parameter.
    pub api_key: Option<String>,
    /// OAuth bearer token used for user record lookups.
    pub access_token: Option<String>,
}

/// Raised when the client cannot be constructed.
#[derive(Debug, Error)]
pub enum IdentityToolkitClientError {
    /// Configured settings were unusable.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The lookup endpoint could not be derived from the base URL.
    #[error("invalid identity toolkit endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The underlying HTTP client failed to build.
    #[error("failed to build identity toolkit http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Identity provider adapter implementing both provider-facing ports.
pub struct IdentityToolkitClient {
    client: Client,
    lookup_endpoint: Url,
    credentials: IdentityToolkitCredentials,
}

impl IdentityToolkitClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = IdentityToolkitClient::new(base_url, timeout, credentials);
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the endpoint cannot be derived or the reqwest
    /// client cannot be constructed.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        credentials: IdentityToolkitCredentials,
    ) -> Result<Self, IdentityToolkitClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            lookup_endpoint: lookup_endpoint(base_url)?,
            credentials,
        })
    }

    /// Build an adapter from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the settings hold an unusable base URL or the
    /// client cannot be constructed.
    pub fn from_settings(
        settings: &IdentityProviderSettings,
    ) -> Result<Self, IdentityToolkitClientError> {
        Self::new(
            settings.base_url()?,
            settings.timeout(),
            IdentityToolkitCredentials {
                api_key: settings.api_key.clone(),
                access_token: settings.access_token.clone(),
            },
        )
    }

    fn lookup_request(&self) -> RequestBuilder {
        let request = self
            .client
            .post(self.lookup_endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        match self.credentials.api_key.as_deref() {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[async_trait]
impl TokenVerifier for IdentityToolkitClient {
    async fn verify_token(&self, raw_token: &str) -> Result<VerifiedToken, TokenVerificationError> {
        let response = self
            .lookup_request()
            .json(&IdTokenLookupDto {
                id_token: raw_token,
            })
            .send()
            .await
            .map_err(|err| TokenVerificationError::unavailable(transport_message(&err)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| TokenVerificationError::unavailable(transport_message(&err)))?;
        if !status.is_success() {
            return Err(map_verify_status_error(status, body.as_ref()));
        }

        parse_verified_token(body.as_ref())
    }
}

#[async_trait]
impl IdentityRecordSource for IdentityToolkitClient {
    async fn get_user_record(&self, subject_id: &str) -> Result<IdentityRecord, IdentityRecordError> {
        let mut request = self.lookup_request().json(&LocalIdLookupDto {
            local_id: [subject_id],
        });
        if let Some(token) = self.credentials.access_token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| IdentityRecordError::unavailable(transport_message(&err)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| IdentityRecordError::unavailable(transport_message(&err)))?;
        if !status.is_success() {
            return Err(map_record_status_error(subject_id, status, body.as_ref()));
        }

        parse_identity_record(subject_id, body.as_ref())
    }
}

fn lookup_endpoint(mut base_url: Url) -> Result<Url, url::ParseError> {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.join(LOOKUP_PATH)
}

fn parse_verified_token(body: &[u8]) -> Result<VerifiedToken, TokenVerificationError> {
    let decoded: LookupResponseDto = serde_json::from_slice(body).map_err(|err| {
        TokenVerificationError::decode(format!("invalid lookup payload: {err}"))
    })?;
    decoded
        .into_first_user()
        .map(|user| VerifiedToken::new(user.local_id))
        .ok_or_else(|| TokenVerificationError::decode("lookup payload contained no user"))
}

fn parse_identity_record(
    subject_id: &str,
    body: &[u8],
) -> Result<IdentityRecord, IdentityRecordError> {
    let decoded: LookupResponseDto = serde_json::from_slice(body)
        .map_err(|err| IdentityRecordError::decode(format!("invalid lookup payload: {err}")))?;
    decoded
        .into_first_user()
        .map(|user| user.into_record())
        .ok_or_else(|| IdentityRecordError::not_found(subject_id))
}

fn map_verify_status_error(status: StatusCode, body: &[u8]) -> TokenVerificationError {
    let reason = provider_reason(body);
    let message = status_message(status, reason.as_deref(), body);

    match reason.as_deref() {
        Some("TOKEN_EXPIRED") => TokenVerificationError::expired(message),
        Some("INVALID_ID_TOKEN" | "USER_NOT_FOUND") => {
            TokenVerificationError::invalid_signature(message)
        }
        Some("USER_DISABLED") => TokenVerificationError::revoked(message),
        Some(code) if status.is_client_error() && MALFORMED_TOKEN_REASONS.contains(&code) => {
            TokenVerificationError::malformed(message)
        }
        // API key and project problems are operator faults, not bad tokens.
        _ => TokenVerificationError::unavailable(message),
    }
}

fn map_record_status_error(subject_id: &str, status: StatusCode, body: &[u8]) -> IdentityRecordError {
    let reason = provider_reason(body);
    if status == StatusCode::NOT_FOUND || reason.as_deref() == Some("USER_NOT_FOUND") {
        return IdentityRecordError::not_found(subject_id);
    }

    let message = status_message(status, reason.as_deref(), body);
    if status.is_client_error() {
        IdentityRecordError::rejected(message)
    } else {
        IdentityRecordError::unavailable(message)
    }
}

fn provider_reason(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ProviderErrorEnvelopeDto>(body)
        .ok()
        .map(|envelope| envelope.error.reason().to_owned())
        .filter(|reason| !reason.is_empty())
}

fn status_message(status: StatusCode, reason: Option<&str>, body: &[u8]) -> String {
    match reason {
        Some(reason) => format!("status {}: {reason}", status.as_u16()),
        None => {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("status {}", status.as_u16())
            } else {
                format!("status {}: {preview}", status.as_u16())
            }
        }
    }
}

fn transport_message(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
