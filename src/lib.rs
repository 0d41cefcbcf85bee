// SPDX-License-Identifier: MIT

//! T-Drive: log driving practice sessions per student profile.
//!
//! This crate provides the backend API for recording practice sessions
//! (date, duration, day/night, conditions) and computing per-profile
//! practice summaries. Authentication is delegated to Firebase Auth;
//! the server only verifies ID tokens.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::SessionStore;
use services::IdentityVerifier;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: SessionStore,
    pub identity_verifier: Arc<IdentityVerifier>,
}
