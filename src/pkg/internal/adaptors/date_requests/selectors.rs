use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::date_requests::spec::{
        DateRequestEntry, DateRequestWithCompany, REQUEST_COLUMNS, REQUEST_COLUMNS_QUALIFIED,
    },
    prelude::Result,
};

pub struct DateRequestSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DateRequestSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DateRequestSelector { pool }
    }

    pub async fn get_all(
        &mut self,
        coordinator_name: Option<&str>,
    ) -> Result<Vec<DateRequestWithCompany>> {
        let rows = match coordinator_name {
            Some(coordinator_name) => {
                sqlx::query_as::<_, DateRequestWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM date_requests r LEFT JOIN companies c ON c.id = r.company_id
                     WHERE r.coordinator_name = $1
                     ORDER BY r.created_at DESC",
                    REQUEST_COLUMNS_QUALIFIED
                ))
                .bind(coordinator_name)
                .fetch_all(&mut *self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DateRequestWithCompany>(&format!(
                    "SELECT {}, c.name AS company_name
                     FROM date_requests r LEFT JOIN companies c ON c.id = r.company_id
                     ORDER BY r.created_at DESC",
                    REQUEST_COLUMNS_QUALIFIED
                ))
                .fetch_all(&mut *self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<DateRequestEntry>> {
        let row = sqlx::query_as::<_, DateRequestEntry>(&format!(
            "SELECT {} FROM date_requests WHERE id = $1",
            REQUEST_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
