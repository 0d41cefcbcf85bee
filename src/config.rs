// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; nothing here is re-read per request.

use serde::Serialize;
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase project ID (ID token issuer/audience)
    pub firebase_project_id: String,
    /// Server port
    pub port: u16,
    /// Path to the JSON session store file
    pub data_file: String,
    /// Public Firebase web config handed to browser/mobile clients
    pub firebase_web: FirebaseWebConfig,
}

/// Public (non-secret) Firebase client configuration.
///
/// Served verbatim on `/api/public-config` so the web client can
/// initialize the Firebase SDK without a build-time config file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl FirebaseWebConfig {
    fn from_env() -> Self {
        Self {
            api_key: env::var("FIREBASE_WEB_API_KEY").ok(),
            auth_domain: env::var("FIREBASE_WEB_AUTH_DOMAIN").ok(),
            project_id: env::var("FIREBASE_WEB_PROJECT_ID").ok(),
            storage_bucket: env::var("FIREBASE_WEB_STORAGE_BUCKET").ok(),
            messaging_sender_id: env::var("FIREBASE_WEB_MESSAGING_SENDER_ID").ok(),
            app_id: env::var("FIREBASE_WEB_APP_ID").ok(),
        }
    }

    /// Names of the env vars that are still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("FIREBASE_WEB_API_KEY");
        }
        if self.auth_domain.is_none() {
            missing.push("FIREBASE_WEB_AUTH_DOMAIN");
        }
        if self.project_id.is_none() {
            missing.push("FIREBASE_WEB_PROJECT_ID");
        }
        if self.storage_bucket.is_none() {
            missing.push("FIREBASE_WEB_STORAGE_BUCKET");
        }
        if self.messaging_sender_id.is_none() {
            missing.push("FIREBASE_WEB_MESSAGING_SENDER_ID");
        }
        if self.app_id.is_none() {
            missing.push("FIREBASE_WEB_APP_ID");
        }
        missing
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("FIREBASE_PROJECT_ID"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .unwrap_or(4000),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "data/sessions.json".to_string()),
            firebase_web: FirebaseWebConfig::from_env(),
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            firebase_project_id: "test-project".to_string(),
            port: 4000,
            data_file: "data/sessions.json".to_string(),
            firebase_web: FirebaseWebConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
