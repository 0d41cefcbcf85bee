// SPDX-License-Identifier: MIT

//! T-Drive API Server
//!
//! Records driving practice sessions per student profile and serves
//! per-profile practice summaries. Sign-in happens in the clients via
//! Firebase Auth; this server verifies the resulting ID tokens.

use std::sync::Arc;
use tdrive_api::{
    config::Config, db::SessionStore, services::IdentityVerifier, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting T-Drive API");

    // Initialize the session store (creates the data file on first run)
    let store = SessionStore::new(&config.data_file);
    store
        .init()
        .await
        .expect("Failed to initialize session store");
    tracing::info!(path = %config.data_file, "Session store ready");

    // Initialize the ID token verifier once, before serving any request
    let identity_verifier = Arc::new(
        IdentityVerifier::new(&config.firebase_project_id)
            .expect("Failed to initialize identity verifier"),
    );

    // Build shared state
    let port = config.port;
    let state = Arc::new(AppState {
        config,
        store,
        identity_verifier,
    });

    // Build router
    let app = tdrive_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tdrive_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
