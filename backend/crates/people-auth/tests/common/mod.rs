#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use people_auth::ProviderSettings;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROJECT_ID: &str = "people-api-test";
pub const KID: &str = "test-key-1";

const PRIVATE_KEY_PEM: &str = include_str!("../fixtures/test_rsa_private.pem");

/// Public half of the fixture key, as the provider would publish it
const MODULUS: &str = "lSlkNm0qMUg-qseEREd62yig4_bmHcaEBP_MYOo0Gx71EHX7peTj1fJGFyoDgVOO_Z2yOAJjEMze6453iJYaVW7cBceSHlbhZfjSRj1l-LX5EWni5HFlmAdqhYYMMzk-_bcJLg31IdQKDT0zdvzAA98B9VTlbh3HtKmD-IF7oGyAlfC1EQkcwWUqZ6VtDz3Rdm3lPj9ZCaDyMpRY51PF1l5BVJeaCDYE-8r7U8ZlH7_H9otc82_MTpzO29J8mLv6WUI3xBR05JCNSyDnZpiDa2ddEaL6LhM9RC2fpQcrylrvOXXBpJPRJTIUP4UFSUMFOkpk2Rl8nRXYT70NPFBR3Q";
const EXPONENT: &str = "AQAB";

pub fn jwks_body() -> Value {
    json!({
        "keys": [{
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "kid": KID,
            "n": MODULUS,
            "e": EXPONENT,
        }]
    })
}

/// Mock provider serving the fixture key set, expected to be hit `fetches` times
pub async fn start_provider(fetches: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jwks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_body()))
        .expect(fetches)
        .mount(&server)
        .await;
    server
}

pub fn settings_for(server: &MockServer) -> ProviderSettings {
    ProviderSettings {
        project_id: PROJECT_ID.to_string(),
        jwks_url: format!("{}/jwks", server.uri()),
    }
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}

/// Claims as the provider mints them for `uid`
pub fn provider_claims(uid: &str) -> Value {
    let now = now();
    json!({
        "iss": format!("https://securetoken.google.com/{}", PROJECT_ID),
        "aud": PROJECT_ID,
        "sub": uid,
        "iat": now,
        "exp": now + 3600,
        "email": format!("{}@example.com", uid),
    })
}

pub fn sign(claims: &Value, kid: Option<&str>) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY_PEM.as_bytes()).expect("fixture key");
    encode(&header, claims, &key).expect("Failed to encode JWT")
}

pub fn provider_token(uid: &str) -> String {
    sign(&provider_claims(uid), Some(KID))
}
