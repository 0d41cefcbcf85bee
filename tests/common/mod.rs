// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tdrive_api::config::Config;
use tdrive_api::db::SessionStore;
use tdrive_api::routes::create_router;
use tdrive_api::services::IdentityVerifier;
use tdrive_api::AppState;
use tempfile::TempDir;

/// HS256 secret shared between test token minting and the static verifier.
pub const TEST_IDENTITY_SECRET: &[u8] = b"tdrive-test-identity-secret";

/// A test app with its own temporary session file.
#[allow(dead_code)]
pub struct TestApp {
    pub app: axum::Router,
    pub state: Arc<AppState>,
    /// Keeps the store's backing directory alive for the test duration
    _data_dir: TempDir,
}

/// Create a test app backed by a fresh temporary store.
#[allow(dead_code)]
pub async fn create_test_app() -> TestApp {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = data_dir.path().join("sessions.json");

    let mut config = Config::test_default();
    config.data_file = data_file.to_string_lossy().into_owned();

    let store = SessionStore::new(&config.data_file);
    store.init().await.expect("Failed to initialize store");

    let identity_verifier = Arc::new(
        IdentityVerifier::new_with_static_secret(
            &config.firebase_project_id,
            TEST_IDENTITY_SECRET.to_vec(),
        )
        .expect("Failed to build static verifier"),
    );

    let state = Arc::new(AppState {
        config,
        store,
        identity_verifier,
    });

    TestApp {
        app: create_router(state.clone()),
        state,
        _data_dir: data_dir,
    }
}

/// Mint a test ID token for the given uid.
#[allow(dead_code)]
pub fn create_test_token(uid: &str) -> String {
    create_test_token_with_contact(uid, Some("test@example.com"), None)
}

/// Mint a test ID token with explicit contact claims.
#[allow(dead_code)]
pub fn create_test_token_with_contact(
    uid: &str,
    email: Option<&str>,
    phone_number: Option<&str>,
) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        iss: String,
        aud: String,
        sub: String,
        exp: usize,
        iat: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone_number: Option<String>,
    }

    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        iss: "https://securetoken.google.com/test-project".to_string(),
        aud: "test-project".to_string(),
        sub: uid.to_string(),
        exp: now + 3600,
        iat: now,
        email: email.map(String::from),
        phone_number: phone_number.map(String::from),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_IDENTITY_SECRET),
    )
    .expect("Failed to encode test token")
}
