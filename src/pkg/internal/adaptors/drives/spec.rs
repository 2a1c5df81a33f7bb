use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pkg::internal::scheduling::drive::DriveStatus;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct CampusDriveEntry {
    pub id: Uuid,
    pub company_id: Uuid,
    pub coordinator_name: String,
    pub drive_date: NaiveDate,
    pub drive_time: Option<String>,
    pub venue: Option<String>,
    pub notes: Option<String>,
    pub registered_count: i32,
    pub appeared_count: i32,
    pub selected_count: i32,
    pub status: DriveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing shape: the only join the portal ever does is attaching the
/// company's display name.
#[derive(Serialize, FromRow, Debug, Clone)]
pub struct CampusDriveWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub drive: CampusDriveEntry,
    pub company_name: String,
}

pub const DRIVE_COLUMNS: &str = "id, company_id, coordinator_name, drive_date, drive_time, venue, \
     notes, registered_count, appeared_count, selected_count, status, created_at, updated_at";

pub const DRIVE_COLUMNS_QUALIFIED: &str =
    "d.id, d.company_id, d.coordinator_name, d.drive_date, d.drive_time, d.venue, d.notes, \
     d.registered_count, d.appeared_count, d.selected_count, d.status, d.created_at, d.updated_at";
