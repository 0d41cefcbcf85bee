// SPDX-License-Identifier: MIT

//! API authentication tests.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without valid tokens
//! 2. Protected routes accept requests with valid tokens
//! 3. The verified identity is what handlers see

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_protected_route_without_token() {
    let harness = common::create_test_app().await;

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let harness = common::create_test_app().await;

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/sessions")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_rejected() {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        iss: String,
        aud: String,
        sub: String,
        exp: usize,
    }

    let harness = common::create_test_app().await;

    let claims = Claims {
        iss: "https://securetoken.google.com/test-project".to_string(),
        aud: "test-project".to_string(),
        sub: "u1".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/sessions")
                .header(header::AUTHORIZATION, format!("Bearer {forged}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_echoes_verified_identity() {
    let harness = common::create_test_app().await;
    let token =
        common::create_test_token_with_contact("u1", Some("u1@example.com"), Some("+15550001111"));

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["user"]["uid"], "u1");
    assert_eq!(json["user"]["email"], "u1@example.com");
    assert_eq!(json["user"]["phoneNumber"], "+15550001111");
}

#[tokio::test]
async fn test_health_is_public() {
    let harness = common::create_test_app().await;

    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_public_config_reports_missing_vars() {
    let harness = common::create_test_app().await;

    // test_default leaves the Firebase web config unset
    let response = harness
        .app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/public-config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["missing"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("FIREBASE_WEB_API_KEY")));
}
