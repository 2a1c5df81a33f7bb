use chrono::NaiveDate;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::blocked_dates::spec::BlockedDateEntry, prelude::Result};

pub struct BlockedDateMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> BlockedDateMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        BlockedDateMutator { pool }
    }

    pub async fn create(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
        created_by: &str,
    ) -> Result<BlockedDateEntry> {
        let row = sqlx::query_as::<_, BlockedDateEntry>(
            r#"
            INSERT INTO blocked_dates (start_date, end_date, reason, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, start_date, end_date, reason, created_by, created_at
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(reason)
        .bind(created_by)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blocked_dates WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
