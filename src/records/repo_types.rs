use sqlx::FromRow;
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

/// One day's dose log for one user.
#[derive(Debug, Clone, FromRow)]
pub struct MedicationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub morning_taken: bool,
    pub afternoon_taken: bool,
    pub evening_taken: bool,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Dose flags and notes as submitted by the client.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub date: Date,
    pub morning_taken: bool,
    pub afternoon_taken: bool,
    pub evening_taken: bool,
    pub notes: Option<String>,
}

/// Inclusive date window covering `today` and the two preceding days.
pub fn recent_window(today: Date) -> (Date, Date) {
    let start = today.checked_sub(Duration::days(2)).unwrap_or(Date::MIN);
    (start, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn window_spans_three_days_inclusive() {
        let (start, end) = recent_window(date!(2024 - 03 - 15));
        assert_eq!(start, date!(2024 - 03 - 13));
        assert_eq!(end, date!(2024 - 03 - 15));
    }

    #[test]
    fn window_excludes_the_fourth_day_back() {
        let (start, _) = recent_window(date!(2024 - 03 - 15));
        assert!(date!(2024 - 03 - 12) < start);
    }

    #[test]
    fn window_crosses_month_boundaries() {
        let (start, end) = recent_window(date!(2024 - 03 - 01));
        assert_eq!(start, date!(2024 - 02 - 28));
        assert_eq!(end, date!(2024 - 03 - 01));
    }

    #[test]
    fn window_crosses_year_boundaries() {
        let (start, _) = recent_window(date!(2024 - 01 - 01));
        assert_eq!(start, date!(2023 - 12 - 30));
    }
}
