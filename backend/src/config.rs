//! Identity provider configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Settings for the outbound identity provider client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IDENTITY_PROVIDER")]
pub struct IdentityProviderSettings {
    /// Root URL of the provider REST API.
    pub base_url: Option<String>,
    /// Public API key sent with token verification requests.
    pub api_key: Option<String>,
    /// OAuth access token authorising user record lookups.
    pub access_token: Option<String>,
    /// Per-request timeout applied by the HTTP client. Zero selects the
    /// default.
    #[ortho_config(default = 10)]
    pub timeout_seconds: u64,
}

/// Raised when configured values cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The base URL did not parse.
    #[error("invalid identity provider base url {value:?}: {message}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl IdentityProviderSettings {
    /// Return the configured base URL, falling back to the default.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(raw).map_err(|err| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the configured request timeout, falling back to the default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            seconds => Duration::from_secs(seconds),
        }
    }
}
