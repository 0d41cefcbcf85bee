// SPDX-License-Identifier: MIT

//! Practice session model for storage and API.
//!
//! Field names are camelCase on the wire and on disk to stay compatible
//! with the JSON session files written by earlier deployments.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Whether a session took place in daylight or after dark.
///
/// Night hours are tracked separately because learner-permit rules
/// typically require a minimum amount of night driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TimeOfDay {
    Day,
    Night,
}

/// Stored practice session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PracticeSession {
    /// Unique session ID (UUIDv4), assigned at creation
    pub id: String,
    /// Firebase uid of the authenticated creator
    pub owner_user_id: String,
    /// Creator's email at creation time, if the provider shared one
    #[serde(default)]
    pub owner_email: Option<String>,
    /// Creator's phone number at creation time, if the provider shared one
    #[serde(default)]
    pub owner_phone: Option<String>,
    /// Caller-chosen grouping key (e.g. which student drove)
    pub profile_id: String,
    /// Practice date as entered by the caller (opaque, no calendar validation)
    pub date: String,
    /// Start time as entered by the caller (opaque)
    pub start_time: String,
    /// Session length in minutes, strictly positive
    pub duration_minutes: f64,
    /// Day or night driving
    pub time_of_day: TimeOfDay,
    /// Free-form weather description
    pub weather: String,
    /// Optional free-form notes
    #[serde(default)]
    pub notes: String,
    /// Server-assigned creation timestamp (RFC 3339)
    pub created_at: String,
}

impl PracticeSession {
    /// Ownership/profile filter shared by the list, stats, and store paths.
    ///
    /// No profile ID means "all profiles for this owner".
    pub fn matches(&self, owner_user_id: &str, profile_id: Option<&str>) -> bool {
        if self.owner_user_id != owner_user_id {
            return false;
        }
        match profile_id {
            Some(profile_id) => self.profile_id == profile_id,
            None => true,
        }
    }
}

/// Caller-supplied candidate session, before server-assigned fields.
///
/// Every field is optional at the deserialization layer so that
/// validation (not serde) produces the field-level error messages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    /// Accepts a JSON number or a numeric string
    #[serde(default)]
    pub duration_minutes: Option<serde_json::Value>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A candidate session that passed validation.
#[derive(Debug, Clone)]
pub struct ValidSession {
    pub profile_id: String,
    pub date: String,
    pub start_time: String,
    pub duration_minutes: f64,
    pub time_of_day: TimeOfDay,
    pub weather: String,
    pub notes: String,
}

impl CreateSessionRequest {
    /// Validate a candidate session.
    ///
    /// First failure wins: required fields are checked in declaration
    /// order, then the duration must be a finite positive number, then
    /// the time of day must be one of the two enumerated values.
    ///
    /// Required string fields are trimmed before the presence check, so
    /// whitespace-only values count as missing.
    pub fn validate(self) -> Result<ValidSession, String> {
        let profile_id = require_str(self.profile_id, "profileId")?;
        let date = require_str(self.date, "date")?;
        let start_time = require_str(self.start_time, "startTime")?;
        let duration_raw = match self.duration_minutes {
            Some(value) if !value.is_null() => value,
            _ => return Err("durationMinutes is required".to_string()),
        };
        let time_of_day_raw = require_str(self.time_of_day, "timeOfDay")?;
        let weather = require_str(self.weather, "weather")?;

        let duration_minutes = parse_minutes(&duration_raw)
            .filter(|m| m.is_finite() && *m > 0.0)
            .ok_or_else(|| "durationMinutes must be a positive number".to_string())?;

        let time_of_day = match time_of_day_raw.as_str() {
            "day" => TimeOfDay::Day,
            "night" => TimeOfDay::Night,
            _ => return Err("timeOfDay must be 'day' or 'night'".to_string()),
        };

        Ok(ValidSession {
            profile_id,
            date,
            start_time,
            duration_minutes,
            time_of_day,
            weather,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

fn require_str(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{field} is required")),
    }
}

/// Coerce a JSON number or numeric string to minutes.
fn parse_minutes(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateSessionRequest {
        CreateSessionRequest {
            profile_id: Some("p1".to_string()),
            date: Some("2026-02-15".to_string()),
            start_time: Some("16:00".to_string()),
            duration_minutes: Some(serde_json::json!(60)),
            time_of_day: Some("day".to_string()),
            weather: Some("clear".to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let valid = full_request().validate().expect("should validate");
        assert_eq!(valid.profile_id, "p1");
        assert_eq!(valid.duration_minutes, 60.0);
        assert_eq!(valid.time_of_day, TimeOfDay::Day);
        assert_eq!(valid.notes, "");
    }

    #[test]
    fn test_missing_fields_checked_in_order() {
        let mut req = full_request();
        req.profile_id = None;
        req.weather = None;
        // profileId comes first in field order, so its error wins
        assert_eq!(req.validate().unwrap_err(), "profileId is required");

        let mut req = full_request();
        req.weather = Some("  ".to_string());
        assert_eq!(req.validate().unwrap_err(), "weather is required");
    }

    #[test]
    fn test_zero_and_negative_duration_rejected() {
        let mut req = full_request();
        req.duration_minutes = Some(serde_json::json!(0));
        assert_eq!(
            req.validate().unwrap_err(),
            "durationMinutes must be a positive number"
        );

        let mut req = full_request();
        req.duration_minutes = Some(serde_json::json!(-30));
        assert_eq!(
            req.validate().unwrap_err(),
            "durationMinutes must be a positive number"
        );
    }

    #[test]
    fn test_numeric_string_duration_accepted() {
        let mut req = full_request();
        req.duration_minutes = Some(serde_json::json!("45"));
        let valid = req.validate().expect("numeric string should validate");
        assert_eq!(valid.duration_minutes, 45.0);
    }

    #[test]
    fn test_non_numeric_duration_rejected() {
        let mut req = full_request();
        req.duration_minutes = Some(serde_json::json!("an hour"));
        assert_eq!(
            req.validate().unwrap_err(),
            "durationMinutes must be a positive number"
        );
    }

    #[test]
    fn test_time_of_day_outside_enum_rejected() {
        let mut req = full_request();
        req.time_of_day = Some("evening".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            "timeOfDay must be 'day' or 'night'"
        );
    }

    #[test]
    fn test_duration_checked_before_time_of_day() {
        let mut req = full_request();
        req.duration_minutes = Some(serde_json::json!(0));
        req.time_of_day = Some("evening".to_string());
        assert_eq!(
            req.validate().unwrap_err(),
            "durationMinutes must be a positive number"
        );
    }

    #[test]
    fn test_matches_filters_owner_then_profile() {
        let session = PracticeSession {
            id: "s1".to_string(),
            owner_user_id: "u1".to_string(),
            owner_email: None,
            owner_phone: None,
            profile_id: "p1".to_string(),
            date: "2026-02-15".to_string(),
            start_time: "16:00".to_string(),
            duration_minutes: 60.0,
            time_of_day: TimeOfDay::Day,
            weather: "clear".to_string(),
            notes: String::new(),
            created_at: "2026-02-15T16:00:00Z".to_string(),
        };

        assert!(session.matches("u1", None));
        assert!(session.matches("u1", Some("p1")));
        assert!(!session.matches("u1", Some("p2")));
        assert!(!session.matches("u2", None));
        assert!(!session.matches("u2", Some("p1")));
    }
}
