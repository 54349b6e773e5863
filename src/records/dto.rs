use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::records::repo_types::{MedicationRecord, RecordInput};

/// Body for creating and updating a record. Omitted flags default to "not taken".
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordPayload {
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    #[serde(default)]
    pub morning_taken: bool,
    #[serde(default)]
    pub afternoon_taken: bool,
    #[serde(default)]
    pub evening_taken: bool,
    pub notes: Option<String>,
}

impl From<RecordPayload> for RecordInput {
    fn from(p: RecordPayload) -> Self {
        Self {
            date: p.date,
            morning_taken: p.morning_taken,
            afternoon_taken: p.afternoon_taken,
            evening_taken: p.evening_taken,
            notes: p.notes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub morning_taken: bool,
    pub afternoon_taken: bool,
    pub evening_taken: bool,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<MedicationRecord> for RecordResponse {
    fn from(r: MedicationRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            morning_taken: r.morning_taken,
            afternoon_taken: r.afternoon_taken,
            evening_taken: r.evening_taken,
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn omitted_flags_default_to_not_taken() {
        let payload: RecordPayload =
            serde_json::from_value(serde_json::json!({ "date": "2024-03-15" }))
                .expect("deserialize");
        assert_eq!(payload.date, date!(2024 - 03 - 15));
        assert!(!payload.morning_taken);
        assert!(!payload.afternoon_taken);
        assert!(!payload.evening_taken);
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn flags_and_notes_are_carried_through() {
        let payload: RecordPayload = serde_json::from_value(serde_json::json!({
            "date": "2024-03-15",
            "morning_taken": true,
            "evening_taken": true,
            "notes": "after breakfast"
        }))
        .expect("deserialize");
        let input = RecordInput::from(payload);
        assert!(input.morning_taken);
        assert!(!input.afternoon_taken);
        assert!(input.evening_taken);
        assert_eq!(input.notes.as_deref(), Some("after breakfast"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = serde_json::from_value::<RecordPayload>(
            serde_json::json!({ "date": "not-a-date" }),
        );
        assert!(result.is_err());
    }
}
