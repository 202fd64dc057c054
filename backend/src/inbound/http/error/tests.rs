//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
#[error("provider stack trace: secret internals")]
struct ProviderInternals;

async fn response_body(error: &Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case(Error::authentication("expired"), StatusCode::UNAUTHORIZED)]
#[case(Error::bad_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::validation("title"), StatusCode::BAD_REQUEST)]
#[case(Error::business("closed"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::conflict("duplicate"), StatusCode::CONFLICT)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
fn status_code_matches_error_kind(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn authentication_details_are_redacted() {
    let error = Error::authentication("identity token is invalid: token expired: TOKEN_EXPIRED")
        .with_cause(ProviderInternals);

    let (status, body) = response_body(&error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "code": "authentication", "message": AUTHENTICATION_FAILED_MESSAGE })
    );
}

#[rstest]
#[actix_web::test]
async fn other_kinds_keep_message_but_drop_cause() {
    let error = Error::conflict("task already exists").with_cause(ProviderInternals);

    let (status, body) = response_body(&error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "code": "conflict", "message": "task already exists" })
    );
    assert!(!body.to_string().contains("secret internals"));
}
