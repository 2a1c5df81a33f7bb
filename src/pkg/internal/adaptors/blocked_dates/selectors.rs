use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::blocked_dates::spec::BlockedDateEntry, prelude::Result};

pub struct BlockedDateSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> BlockedDateSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        BlockedDateSelector { pool }
    }

    /// Natural order is ascending start date; the conflict evaluator's
    /// first-match tie-break depends on it.
    pub async fn get_all(&mut self) -> Result<Vec<BlockedDateEntry>> {
        let rows = sqlx::query_as::<_, BlockedDateEntry>(
            "SELECT id, start_date, end_date, reason, created_by, created_at
             FROM blocked_dates ORDER BY start_date",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
