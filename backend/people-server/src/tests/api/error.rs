use crate::ApiError;

use people_auth::AuthError;
use people_core::{CoreError, Person};
use people_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn into_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_login_message() {
    let (status, json) = into_parts(ApiError::unauthorized()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "You must be logged in");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title exceeds 1024 bytes".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_storage_error_returns_400() {
    let error = ApiError::from(DbError::Sqlx {
        source: sqlx::Error::PoolClosed,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "STORAGE_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_expired_token_keeps_verifier_code() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_invalid_claim_reports_claim_as_field() {
    let error = ApiError::from(AuthError::InvalidClaim {
        claim: "aud".into(),
        message: "unexpected audience".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (_, json) = into_parts(error).await;

    assert_eq!(json["error"]["code"], "INVALID_CLAIM");
    assert_eq!(json["error"]["field"], "aud");
}

#[tokio::test]
async fn test_malformed_id_maps_to_validation_error_on_id() {
    let core_error: CoreError = Person::parse_id("42").unwrap_err();

    let (status, json) = into_parts(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_error_message_does_not_leak_into_client_body_location() {
    let error = ApiError::from(AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    });

    match error {
        ApiError::InvalidToken { message, code, .. } => {
            assert_eq!(code, "INVALID_AUTH_SCHEME");
            assert!(!message.contains(".rs"));
        }
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}
