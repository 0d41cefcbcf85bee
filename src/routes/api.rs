// SPDX-License-Identifier: MIT

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::models::{CreateSessionRequest, PracticeSession, PracticeSummary};
use crate::services::AuthUser;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via Firebase ID token).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", delete(delete_session))
        .route("/api/stats", get(get_stats))
}

// ─── User Profile ────────────────────────────────────────────

/// Verified identity echoed back to the client.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserInfo {
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MeResponse {
    pub user: UserInfo,
}

/// Get the current caller identity.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse {
        user: UserInfo {
            uid: user.uid,
            email: user.email,
            phone_number: user.phone_number,
            name: user.name,
        },
    })
}

// ─── Sessions ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileQuery {
    /// Narrow to one profile; absent means all profiles for this owner
    profile_id: Option<String>,
}

impl ProfileQuery {
    /// The effective profile filter. An empty value (`?profileId=`) means
    /// no filter, same as omitting the parameter.
    fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionsResponse {
    pub sessions: Vec<PracticeSession>,
}

/// List the caller's sessions, optionally filtered by profile.
async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<SessionsResponse>> {
    let sessions = state.store.filter(&user.uid, query.profile_id()).await?;

    Ok(Json(SessionsResponse { sessions }))
}

/// Practice summary for the caller, optionally filtered by profile.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<PracticeSummary>> {
    let snapshot = state.store.load().await?;
    let summary = PracticeSummary::compute(&snapshot, &user.uid, query.profile_id());

    Ok(Json(summary))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub session: PracticeSession,
}

/// Create a new practice session.
///
/// `id`, owner fields, and `createdAt` are server-assigned; everything
/// else comes from the validated request body. The record is persisted
/// before the 201 is sent.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: std::result::Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let Json(request) = payload
        .map_err(|_| AppError::BadRequest("Invalid JSON payload".to_string()))?;

    let valid = request.validate().map_err(AppError::BadRequest)?;

    let session = PracticeSession {
        id: uuid::Uuid::new_v4().to_string(),
        owner_user_id: user.uid,
        owner_email: user.email,
        owner_phone: user.phone_number,
        profile_id: valid.profile_id,
        date: valid.date,
        start_time: valid.start_time,
        duration_minutes: valid.duration_minutes,
        time_of_day: valid.time_of_day,
        weather: valid.weather,
        notes: valid.notes,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.store.append(session.clone()).await?;

    tracing::info!(
        session_id = %session.id,
        profile_id = %session.profile_id,
        "Session recorded"
    );

    Ok((StatusCode::CREATED, Json(SessionResponse { session })))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Delete one of the caller's sessions.
///
/// 404 for an unknown ID, 403 when the record belongs to someone else.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let snapshot = state.store.load().await?;
    let target = snapshot
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    if target.owner_user_id != user.uid {
        return Err(AppError::Forbidden);
    }

    // The record can vanish between snapshot and delete; treat that as
    // not-found rather than success.
    let removed = state.store.delete(&id).await?;
    if !removed {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    tracing::info!(session_id = %id, "Session deleted");

    Ok(Json(DeleteResponse { deleted: true }))
}
