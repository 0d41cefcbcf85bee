// SPDX-License-Identifier: MIT

//! File-backed session store.
//!
//! The whole collection is one pretty-printed JSON array, fully read on
//! every load and fully rewritten on every mutation. That is deliberate:
//! the store serves one household's worth of practice sessions, not a
//! high-throughput workload. Mutations take an async mutex for the whole
//! read-modify-write so concurrent appends/deletes cannot lose updates.

use crate::error::AppError;
use crate::models::PracticeSession;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// JSON-file session store.
#[derive(Clone)]
pub struct SessionStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until `init`, `load`, or a mutation runs.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// First-run initialization: create the parent directory and an empty
    /// collection file if none exists yet.
    pub async fn init(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::Storage(format!("Failed to create data directory: {e}"))
                })?;
            }
        }

        match tokio::fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::write(&self.path, b"[]\n").await.map_err(|e| {
                    AppError::Storage(format!("Failed to initialize session file: {e}"))
                })?;
                tracing::info!(path = %self.path.display(), "Created empty session file");
                Ok(())
            }
            Err(e) => Err(AppError::Storage(format!(
                "Failed to stat session file: {e}"
            ))),
        }
    }

    /// Load the full session collection.
    ///
    /// A missing or empty file yields an empty collection; an unreadable
    /// or malformed file is a storage error, never silently empty.
    pub async fn load(&self) -> Result<Vec<PracticeSession>, AppError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read session file: {e}"
                )))
            }
        };

        if raw.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw)
            .map_err(|e| AppError::Storage(format!("Malformed session file: {e}")))
    }

    /// Load only the sessions owned by `owner_user_id`, optionally narrowed
    /// to one profile.
    pub async fn filter(
        &self,
        owner_user_id: &str,
        profile_id: Option<&str>,
    ) -> Result<Vec<PracticeSession>, AppError> {
        let sessions = self.load().await?;
        Ok(sessions
            .into_iter()
            .filter(|s| s.matches(owner_user_id, profile_id))
            .collect())
    }

    /// Append a fully-constructed session and persist the collection.
    ///
    /// The write completes before this returns, so callers acknowledge
    /// only after the record is on disk.
    pub async fn append(&self, session: PracticeSession) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load().await?;
        sessions.push(session);
        self.persist(&sessions).await
    }

    /// Remove at most one session by ID and persist the collection.
    ///
    /// Returns whether a session was found and removed. Ownership is the
    /// caller's job; the store only matches IDs.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load().await?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);

        if sessions.len() == before {
            return Ok(false);
        }

        self.persist(&sessions).await?;
        Ok(true)
    }

    async fn persist(&self, sessions: &[PracticeSession]) -> Result<(), AppError> {
        let raw = serde_json::to_vec_pretty(sessions)
            .map_err(|e| AppError::Storage(format!("Failed to serialize sessions: {e}")))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write session file: {e}")))
    }
}
