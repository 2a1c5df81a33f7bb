use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::coordinators::spec::CoordinatorEntry, prelude::Result};

pub struct CoordinatorSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CoordinatorSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CoordinatorSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<CoordinatorEntry>> {
        let rows = sqlx::query_as::<_, CoordinatorEntry>(
            "SELECT id, name, phone, created_at FROM coordinators ORDER BY name",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    /// Roster membership check used when a date request names its
    /// coordinator.
    pub async fn exists_by_name(&mut self, name: &str) -> Result<bool> {
        let found: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM coordinators WHERE lower(name) = lower($1) LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(found.is_some())
    }
}
