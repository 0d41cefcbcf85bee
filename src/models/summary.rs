// SPDX-License-Identifier: MIT

//! Practice summary aggregates.
//!
//! Summaries are derived on every request from a snapshot of the session
//! collection; nothing here is persisted or cached.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{PracticeSession, TimeOfDay};

/// Aggregate practice hours for one owner, optionally narrowed to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PracticeSummary {
    /// Profile the summary covers, or "all" when no filter was supplied
    pub profile_id: String,
    /// Number of sessions in the filtered set
    pub session_count: usize,
    /// Total practice hours, rounded to two decimals
    pub total_hours: f64,
    /// Daylight hours (total minus night)
    pub day_hours: f64,
    /// Night hours
    pub night_hours: f64,
}

impl PracticeSummary {
    /// Compute a summary over a record snapshot.
    ///
    /// Pure function: filters by owner (and profile, when given) with the
    /// same rule as the session list, sums minutes, and converts to hours
    /// rounded to two decimals (round-half-away-from-zero).
    pub fn compute(
        sessions: &[PracticeSession],
        owner_user_id: &str,
        profile_id: Option<&str>,
    ) -> Self {
        let filtered: Vec<&PracticeSession> = sessions
            .iter()
            .filter(|s| s.matches(owner_user_id, profile_id))
            .collect();

        let total_minutes: f64 = filtered.iter().map(|s| s.duration_minutes).sum();
        let night_minutes: f64 = filtered
            .iter()
            .filter(|s| s.time_of_day == TimeOfDay::Night)
            .map(|s| s.duration_minutes)
            .sum();

        Self {
            profile_id: profile_id.unwrap_or("all").to_string(),
            session_count: filtered.len(),
            total_hours: round_hours(total_minutes),
            day_hours: round_hours(total_minutes - night_minutes),
            night_hours: round_hours(night_minutes),
        }
    }
}

/// Minutes to hours, rounded to two decimal places.
fn round_hours(minutes: f64) -> f64 {
    (minutes / 60.0 * 100.0).round() / 100.0
}
