//! Identity primitives produced by token verification and profile resolution.
//!
//! [`VerifiedIdentity`] can only be minted inside the crate by the
//! verification service, so holding one proves a provider accepted the token.
//! [`IdentityInfo`] is the normalised profile built fresh from provider data
//! for every resolution call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider label used when the provider record names no linked provider.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Validation errors raised while minting identity primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    /// Subject identifier was empty or whitespace only.
    EmptySubjectId,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubjectId => write!(f, "subject id must not be empty"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Subject confirmed by the token verification provider.
///
/// ## Invariants
/// - `subject_id` is non-empty once trimmed of whitespace.
/// - Only successful verification constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedIdentity {
    subject_id: String,
}

impl VerifiedIdentity {
    pub(crate) fn try_new(subject_id: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let subject_id = subject_id.into();
        if subject_id.trim().is_empty() {
            return Err(IdentityValidationError::EmptySubjectId);
        }
        Ok(Self { subject_id })
    }

    /// Opaque identifier the provider assigned to the principal.
    pub fn subject_id(&self) -> &str {
        self.subject_id.as_str()
    }
}

impl AsRef<str> for VerifiedIdentity {
    fn as_ref(&self) -> &str {
        self.subject_id()
    }
}

impl fmt::Display for VerifiedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject_id())
    }
}

/// One entry of the provider's linked sign-in methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProvider {
    /// Provider identifier such as `password` or `google.com`.
    pub provider_id: String,
}

impl LinkedProvider {
    /// Build an entry for `provider_id`.
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
        }
    }
}

/// Raw user record as reported by the identity record provider.
///
/// Every attribute may be missing; normalisation into [`IdentityInfo`] owns
/// the defaulting rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Primary email address.
    pub email: Option<String>,
    /// Human readable name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub photo_url: Option<String>,
    /// Phone number in provider format.
    pub phone_number: Option<String>,
    /// Whether the provider confirmed the email address.
    pub email_verified: Option<bool>,
    /// Linked sign-in providers, first entry being the primary one.
    pub linked_providers: Option<Vec<LinkedProvider>>,
}

/// Normalised identity profile returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInfo {
    /// Subject the profile belongs to.
    pub subject_id: String,
    /// Primary email address.
    pub email: Option<String>,
    /// Human readable name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub photo_url: Option<String>,
    /// Phone number in provider format.
    pub phone_number: Option<String>,
    /// Whether the provider confirmed the email address; `false` when unknown.
    pub email_verified: bool,
    /// Primary sign-in provider, or [`UNKNOWN_PROVIDER`].
    pub provider: String,
}

impl IdentityInfo {
    /// Normalise a provider record for `subject_id`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{IdentityInfo, IdentityRecord, LinkedProvider, UNKNOWN_PROVIDER};
    ///
    /// let record = IdentityRecord {
    ///     email: Some("a@b.com".to_owned()),
    ///     linked_providers: Some(vec![LinkedProvider::new("google.com")]),
    ///     ..IdentityRecord::default()
    /// };
    /// let info = IdentityInfo::from_record("u1", record);
    /// assert_eq!(info.provider, "google.com");
    ///
    /// let bare = IdentityInfo::from_record("u2", IdentityRecord::default());
    /// assert_eq!(bare.provider, UNKNOWN_PROVIDER);
    /// assert!(!bare.email_verified);
    /// ```
    pub fn from_record(subject_id: impl Into<String>, record: IdentityRecord) -> Self {
        let IdentityRecord {
            email,
            display_name,
            photo_url,
            phone_number,
            email_verified,
            linked_providers,
        } = record;

        Self {
            subject_id: subject_id.into(),
            email,
            display_name,
            photo_url,
            phone_number,
            email_verified: email_verified.unwrap_or(false),
            provider: primary_provider(linked_providers.as_deref()),
        }
    }
}

fn primary_provider(linked: Option<&[LinkedProvider]>) -> String {
    linked
        .and_then(<[LinkedProvider]>::first)
        .map(|entry| entry.provider_id.as_str())
        .filter(|id| !id.trim().is_empty())
        .unwrap_or(UNKNOWN_PROVIDER)
        .to_owned()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn full_record() -> IdentityRecord {
        IdentityRecord {
            email: Some("ada@example.com".to_owned()),
            display_name: Some("Ada Lovelace".to_owned()),
            photo_url: Some("https://example.com/ada.png".to_owned()),
            phone_number: Some("+441234567890".to_owned()),
            email_verified: Some(true),
            linked_providers: Some(vec![
                LinkedProvider::new("google.com"),
                LinkedProvider::new("password"),
            ]),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn verified_identity_rejects_blank_subjects(#[case] subject: &str) {
        let result = VerifiedIdentity::try_new(subject);
        assert_eq!(result, Err(IdentityValidationError::EmptySubjectId));
    }

    #[rstest]
    fn verified_identity_exposes_subject() {
        let identity = VerifiedIdentity::try_new("u1").expect("valid subject");
        assert_eq!(identity.subject_id(), "u1");
        assert_eq!(identity.to_string(), "u1");
    }

    #[rstest]
    fn full_record_is_copied_and_first_provider_wins(full_record: IdentityRecord) {
        let info = IdentityInfo::from_record("u1", full_record);

        assert_eq!(info.subject_id, "u1");
        assert_eq!(info.email.as_deref(), Some("ada@example.com"));
        assert_eq!(info.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(info.photo_url.as_deref(), Some("https://example.com/ada.png"));
        assert_eq!(info.phone_number.as_deref(), Some("+441234567890"));
        assert!(info.email_verified);
        assert_eq!(info.provider, "google.com");
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(Vec::new()))]
    #[case::blank_first(Some(vec![LinkedProvider::new("  "), LinkedProvider::new("password")]))]
    fn missing_provider_metadata_falls_back_to_unknown(
        #[case] linked_providers: Option<Vec<LinkedProvider>>,
    ) {
        let record = IdentityRecord {
            linked_providers,
            ..IdentityRecord::default()
        };
        let info = IdentityInfo::from_record("u1", record);
        assert_eq!(info.provider, UNKNOWN_PROVIDER);
    }

    #[rstest]
    fn unknown_email_verification_defaults_to_false() {
        let info = IdentityInfo::from_record("u1", IdentityRecord::default());
        assert!(!info.email_verified);
        assert!(info.email.is_none());
    }

    #[rstest]
    fn identity_info_serialises_in_camel_case(full_record: IdentityRecord) {
        let value = serde_json::to_value(IdentityInfo::from_record("u1", full_record))
            .expect("identity info should serialise");
        assert_eq!(value["subjectId"], "u1");
        assert_eq!(value["emailVerified"], true);
        assert_eq!(value["provider"], "google.com");
    }
}
