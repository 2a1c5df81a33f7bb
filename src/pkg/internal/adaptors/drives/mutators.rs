use chrono::NaiveDate;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::drives::spec::{CampusDriveEntry, DRIVE_COLUMNS},
        scheduling::drive::DriveStatus,
    },
    prelude::Result,
};

pub struct CreateDriveData {
    pub company_id: Uuid,
    pub coordinator_name: String,
    pub drive_date: NaiveDate,
    pub drive_time: Option<String>,
    pub venue: Option<String>,
    pub notes: Option<String>,
}

#[derive(Default)]
pub struct PatchDriveData {
    pub drive_time: Option<String>,
    pub venue: Option<String>,
    pub notes: Option<String>,
    pub registered_count: Option<i32>,
    pub appeared_count: Option<i32>,
    pub selected_count: Option<i32>,
    pub status: Option<DriveStatus>,
}

/// Insert outcome: the partial unique index on scheduled drive dates is the
/// real arbiter of the lock, the pre-check can always be stale.
pub enum CreateDriveOutcome {
    Created(CampusDriveEntry),
    DateTaken,
}

pub struct DriveMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DriveMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DriveMutator { pool }
    }

    pub async fn create(&mut self, drive: CreateDriveData) -> Result<CreateDriveOutcome> {
        let inserted = sqlx::query_as::<_, CampusDriveEntry>(&format!(
            r#"
            INSERT INTO campus_drives
                (company_id, coordinator_name, drive_date, drive_time, venue, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            DRIVE_COLUMNS
        ))
        .bind(drive.company_id)
        .bind(&drive.coordinator_name)
        .bind(drive.drive_date)
        .bind(&drive.drive_time)
        .bind(&drive.venue)
        .bind(&drive.notes)
        .bind(DriveStatus::Scheduled)
        .fetch_one(&mut *self.pool)
        .await;
        match inserted {
            Ok(row) => Ok(CreateDriveOutcome::Created(row)),
            Err(sqlx::Error::Database(db))
                if db.constraint() == Some("one_scheduled_drive_per_day") =>
            {
                Ok(CreateDriveOutcome::DateTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&mut self, id: Uuid, patch: PatchDriveData) -> Result<Option<CampusDriveEntry>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE campus_drives SET updated_at = now()");
        if let Some(drive_time) = &patch.drive_time {
            qb.push(", drive_time = ").push_bind(drive_time);
        }
        if let Some(venue) = &patch.venue {
            qb.push(", venue = ").push_bind(venue);
        }
        if let Some(notes) = &patch.notes {
            qb.push(", notes = ").push_bind(notes);
        }
        if let Some(registered) = patch.registered_count {
            qb.push(", registered_count = ").push_bind(registered);
        }
        if let Some(appeared) = patch.appeared_count {
            qb.push(", appeared_count = ").push_bind(appeared);
        }
        if let Some(selected) = patch.selected_count {
            qb.push(", selected_count = ").push_bind(selected);
        }
        if let Some(status) = patch.status {
            qb.push(", status = ").push_bind(status);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", DRIVE_COLUMNS));
        let row = qb
            .build_query_as::<CampusDriveEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM campus_drives WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
