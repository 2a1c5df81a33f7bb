use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::drives::spec::{
            CampusDriveEntry, CampusDriveWithCompany, DRIVE_COLUMNS, DRIVE_COLUMNS_QUALIFIED,
        },
        scheduling::drive::DriveStatus,
    },
    prelude::Result,
};

pub struct DriveSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DriveSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DriveSelector { pool }
    }

    pub async fn get_all(&mut self, company_id: Option<Uuid>) -> Result<Vec<CampusDriveWithCompany>> {
        let rows = match company_id {
            Some(company_id) => {
                sqlx::query_as::<_, CampusDriveWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM campus_drives d JOIN companies c ON c.id = d.company_id
                     WHERE d.company_id = $1
                     ORDER BY d.drive_date",
                    DRIVE_COLUMNS_QUALIFIED
                ))
                .bind(company_id)
                .fetch_all(&mut *self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CampusDriveWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM campus_drives d JOIN companies c ON c.id = d.company_id
                     ORDER BY d.drive_date",
                    DRIVE_COLUMNS_QUALIFIED
                ))
                .fetch_all(&mut *self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// The lock snapshot: every drive currently holding a calendar date.
    pub async fn get_scheduled(&mut self) -> Result<Vec<CampusDriveEntry>> {
        let rows = sqlx::query_as::<_, CampusDriveEntry>(&format!(
            "SELECT {} FROM campus_drives WHERE status = $1 ORDER BY drive_date",
            DRIVE_COLUMNS
        ))
        .bind(DriveStatus::Scheduled)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<CampusDriveEntry>> {
        let row = sqlx::query_as::<_, CampusDriveEntry>(&format!(
            "SELECT {} FROM campus_drives WHERE id = $1",
            DRIVE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
