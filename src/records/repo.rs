use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    records::repo_types::{recent_window, MedicationRecord, RecordInput},
};

impl MedicationRecord {
    pub async fn create(db: &PgPool, user_id: Uuid, input: &RecordInput) -> ApiResult<Self> {
        let record = sqlx::query_as::<_, MedicationRecord>(
            r#"
            INSERT INTO medication_records
                (user_id, date, morning_taken, afternoon_taken, evening_taken, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, date, morning_taken, afternoon_taken, evening_taken,
                      notes, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(input.date)
        .bind(input.morning_taken)
        .bind(input.afternoon_taken)
        .bind(input.evening_taken)
        .bind(&input.notes)
        .fetch_one(db)
        .await?;
        Ok(record)
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> ApiResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, MedicationRecord>(
            r#"
            SELECT id, user_id, date, morning_taken, afternoon_taken, evening_taken,
                   notes, created_at, updated_at
            FROM medication_records
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Records for `today` and the two preceding days, newest first.
    pub async fn list_recent(db: &PgPool, user_id: Uuid, today: Date) -> ApiResult<Vec<Self>> {
        let (start, end) = recent_window(today);
        let rows = sqlx::query_as::<_, MedicationRecord>(
            r#"
            SELECT id, user_id, date, morning_taken, afternoon_taken, evening_taken,
                   notes, created_at, updated_at
            FROM medication_records
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Full overwrite of flags and notes for a record owned by `user_id`.
    /// The id and owner never change; `updated_at` is refreshed.
    pub async fn update(
        db: &PgPool,
        record_id: Uuid,
        user_id: Uuid,
        input: &RecordInput,
    ) -> ApiResult<Self> {
        let record = sqlx::query_as::<_, MedicationRecord>(
            r#"
            UPDATE medication_records
            SET morning_taken = $3,
                afternoon_taken = $4,
                evening_taken = $5,
                notes = $6,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, date, morning_taken, afternoon_taken, evening_taken,
                      notes, created_at, updated_at
            "#,
        )
        .bind(record_id)
        .bind(user_id)
        .bind(input.morning_taken)
        .bind(input.afternoon_taken)
        .bind(input.evening_taken)
        .bind(&input.notes)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Record not found".into()))?;
        Ok(record)
    }

    pub async fn list_all(db: &PgPool) -> ApiResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, MedicationRecord>(
            r#"
            SELECT id, user_id, date, morning_taken, afternoon_taken, evening_taken,
                   notes, created_at, updated_at
            FROM medication_records
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
