//! DTOs for the Identity Toolkit `accounts:lookup` endpoint.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::{IdentityRecord, LinkedProvider};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IdTokenLookupDto<'a> {
    pub(super) id_token: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LocalIdLookupDto<'a> {
    pub(super) local_id: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
pub(super) struct LookupResponseDto {
    #[serde(default)]
    pub(super) users: Vec<ProviderUserDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProviderUserDto {
    pub(super) local_id: String,
    pub(super) email: Option<String>,
    pub(super) display_name: Option<String>,
    pub(super) photo_url: Option<String>,
    pub(super) phone_number: Option<String>,
    pub(super) email_verified: Option<bool>,
    pub(super) provider_user_info: Option<Vec<ProviderUserInfoDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProviderUserInfoDto {
    pub(super) provider_id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorEnvelopeDto {
    pub(super) error: ProviderErrorDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorDto {
    #[serde(default)]
    pub(super) message: String,
}

impl LookupResponseDto {
    pub(super) fn into_first_user(self) -> Option<ProviderUserDto> {
        self.users.into_iter().next()
    }
}

impl ProviderUserDto {
    pub(super) fn into_record(self) -> IdentityRecord {
        IdentityRecord {
            email: self.email,
            display_name: self.display_name,
            photo_url: self.photo_url,
            phone_number: self.phone_number,
            email_verified: self.email_verified,
            linked_providers: self.provider_user_info.map(|entries| {
                entries
                    .into_iter()
                    .map(|entry| LinkedProvider::new(entry.provider_id))
                    .collect()
            }),
        }
    }
}

impl ProviderErrorDto {
    /// Leading reason code, e.g. `TOKEN_EXPIRED` from `TOKEN_EXPIRED : detail`.
    pub(super) fn reason(&self) -> &str {
        self.message
            .split(|c: char| c == ':' || c.is_whitespace())
            .next()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for DTO decoding.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn provider_user_maps_into_record() {
        let body = r#"{
            "users": [{
                "localId": "u1",
                "email": "a@b.com",
                "emailVerified": true,
                "displayName": "Ada",
                "providerUserInfo": [
                    { "providerId": "google.com", "rawId": "1234" },
                    { "providerId": "password" }
                ],
                "passwordHash": "ignored"
            }]
        }"#;
        let response: LookupResponseDto = serde_json::from_str(body).expect("lookup decodes");
        let user = response.into_first_user().expect("one user");
        assert_eq!(user.local_id, "u1");

        let record = user.into_record();
        assert_eq!(record.email.as_deref(), Some("a@b.com"));
        assert_eq!(record.email_verified, Some(true));
        assert_eq!(
            record.linked_providers,
            Some(vec![
                LinkedProvider::new("google.com"),
                LinkedProvider::new("password")
            ])
        );
    }

    #[rstest]
    fn missing_users_decode_as_empty() {
        let response: LookupResponseDto = serde_json::from_str("{}").expect("empty decodes");
        assert!(response.into_first_user().is_none());
    }

    #[rstest]
    #[case("TOKEN_EXPIRED", "TOKEN_EXPIRED")]
    #[case("INVALID_ID_TOKEN : Invalid JWT", "INVALID_ID_TOKEN")]
    #[case("INVALID_ARGUMENT: bad", "INVALID_ARGUMENT")]
    #[case("", "")]
    fn reason_is_leading_code(#[case] message: &str, #[case] expected: &str) {
        let error = ProviderErrorDto {
            message: message.to_owned(),
        };
        assert_eq!(error.reason(), expected);
    }
}
