#![allow(dead_code)]

//! Test infrastructure for people-server API tests

use people_auth::JwtValidator;
use people_server::{AppState, build_router};

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    people_db::connection::storage::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Auth disabled: no middleware, everyone anonymous
pub async fn open_state() -> AppState {
    AppState::new(create_test_pool().await)
}

/// Auth enabled with the HS256 test secret
pub async fn auth_state() -> AppState {
    AppState::new(create_test_pool().await)
        .with_verifier(Arc::new(JwtValidator::with_hs256(JWT_SECRET)))
}

/// Auth enabled and update/delete restricted to the owner
pub async fn scoped_state() -> AppState {
    auth_state().await.with_scope_mutations(true)
}

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: u64,
    iat: u64,
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

/// Create a valid JWT token for testing
pub fn token_for(uid: &str) -> String {
    let now = now();
    sign(&TestClaims {
        sub: uid,
        exp: now + 3600,
        iat: now,
    })
}

/// Create an expired JWT token (for auth rejection tests)
pub fn expired_token_for(uid: &str) -> String {
    let past = now() - 3600;
    sign(&TestClaims {
        sub: uid,
        exp: past,
        iat: past - 3600,
    })
}

fn sign(claims: &TestClaims) -> String {
    encode(
        &Header::default(), // HS256 by default
        claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .expect("Failed to encode JWT")
}

/// Fire one request at a fresh router built from `state`.
///
/// Returns the status and the body parsed as JSON (or a JSON string for
/// plain-text bodies).
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app: Router = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, json)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
