// SPDX-License-Identifier: MIT

//! Bearer-token authentication middleware.
//!
//! Extracts the `Authorization: Bearer <id-token>` header, verifies the
//! token with the Firebase identity verifier, and stashes the resulting
//! [`AuthUser`] in request extensions for handlers.

use crate::error::AppError;
use crate::services::IdentityError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Middleware that requires a valid Firebase ID token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => h[7..].trim(),
        _ => return Err(AppError::Unauthorized),
    };

    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }

    let user = state
        .identity_verifier
        .verify(token)
        .await
        .map_err(|e| match e {
            IdentityError::Invalid(msg) => AppError::InvalidToken(msg),
            IdentityError::Transient(msg) => {
                AppError::Internal(anyhow::anyhow!("identity verification failed: {msg}"))
            }
        })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
