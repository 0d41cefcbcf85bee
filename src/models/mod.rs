// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod session;
pub mod summary;

pub use session::{CreateSessionRequest, PracticeSession, TimeOfDay, ValidSession};
pub use summary::PracticeSummary;
