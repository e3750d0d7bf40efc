//! Capsule domain model.
//!
//! # Responsibility
//! - Define the immutable record pairing a user's message with its quote.
//! - Generate time-based capsule identifiers.
//! - Validate submission input before any record is assembled.
//!
//! # Invariants
//! - A capsule is never mutated after construction; no edit/delete API exists.
//! - `id` is derived from creation time and strictly increases within a process.
//! - `title` and `message` are non-empty after trimming.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};

/// Immutable record pairing a user's message with a generated quote.
///
/// Serialized field names follow the persisted slot layout (`aiQuote`,
/// `dateCreated`, `dateToOpen`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capsule {
    /// Time-based token assigned at creation. Unique within the process,
    /// not cryptographically unique across processes.
    pub id: String,
    /// Required headline; validated non-empty after trimming.
    pub title: String,
    /// Required body; validated non-empty after trimming.
    pub message: String,
    /// Quote drawn from the fixed pool at creation; immutable thereafter.
    pub ai_quote: String,
    /// Creation timestamp, RFC 3339 on the wire.
    pub date_created: DateTime<Utc>,
    /// Advisory open date shown as a hint; never enforced for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to_open: Option<NaiveDate>,
}

/// Submission input rejected before any capsule is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `message` is empty or whitespace-only.
    EmptyMessage,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyMessage => write!(f, "message must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Checks submission input ahead of capsule assembly.
///
/// # Contract
/// - Whitespace-only values count as empty.
/// - `title` is reported before `message` when both are invalid.
pub fn validate_submission(title: &str, message: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(())
}

// Last issued id, kept so two creations inside one millisecond still get
// distinct, increasing ids.
static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Generates a time-based capsule id for the given creation instant.
///
/// The id is the creation time in epoch milliseconds rendered as decimal
/// text, bumped past the previously issued id when the clock has not moved.
pub fn generate_id(created_at: DateTime<Utc>) -> String {
    let now_ms = created_at.timestamp_millis();
    let previous = LAST_ISSUED_MS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if last >= now_ms { last + 1 } else { now_ms })
        })
        .unwrap_or(now_ms);
    let issued = if previous >= now_ms {
        previous + 1
    } else {
        now_ms
    };
    issued.to_string()
}

#[cfg(test)]
mod tests {
    use super::{generate_id, validate_submission, Capsule, ValidationError};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_capsule() -> Capsule {
        Capsule {
            id: "1700000000000".to_string(),
            title: "Hope".to_string(),
            message: "Keep going.".to_string(),
            ai_quote: "Every moment is a fresh beginning.".to_string(),
            date_created: Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap(),
            date_to_open: None,
        }
    }

    #[test]
    fn validate_accepts_trimmed_non_empty_fields() {
        assert!(validate_submission("Hope", "Keep going.").is_ok());
        assert!(validate_submission("  Hope  ", " body ").is_ok());
    }

    #[test]
    fn validate_rejects_empty_or_whitespace_title() {
        assert_eq!(
            validate_submission("", "test"),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_submission("   ", "test"),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn validate_rejects_empty_or_whitespace_message() {
        assert_eq!(
            validate_submission("title", ""),
            Err(ValidationError::EmptyMessage)
        );
        assert_eq!(
            validate_submission("title", " \t\n"),
            Err(ValidationError::EmptyMessage)
        );
    }

    #[test]
    fn serialized_field_names_match_persisted_layout() {
        let json = serde_json::to_value(sample_capsule()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("message"));
        assert!(object.contains_key("aiQuote"));
        assert!(object.contains_key("dateCreated"));
        // Absent open date is omitted entirely, not serialized as null.
        assert!(!object.contains_key("dateToOpen"));
    }

    #[test]
    fn open_date_round_trips_when_present() {
        let mut capsule = sample_capsule();
        capsule.date_to_open = NaiveDate::from_ymd_opt(2027, 1, 1);

        let json = serde_json::to_string(&capsule).unwrap();
        assert!(json.contains("\"dateToOpen\":\"2027-01-01\""));

        let restored: Capsule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, capsule);
    }

    #[test]
    fn generated_ids_are_distinct_and_increasing() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap();
        let first: i64 = generate_id(instant).parse().unwrap();
        let second: i64 = generate_id(instant).parse().unwrap();
        let third: i64 = generate_id(instant).parse().unwrap();
        assert!(second > first);
        assert!(third > second);
    }
}
