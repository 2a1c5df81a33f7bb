use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A closed date interval during which ordinary scheduling is disallowed.
/// Ranges may overlap; each carries its own reason.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct BlockedDateEntry {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
