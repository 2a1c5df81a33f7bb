use sqlx::PgConnection;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::coordinators::spec::CoordinatorEntry, prelude::Result};

pub struct CoordinatorMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CoordinatorMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CoordinatorMutator { pool }
    }

    pub async fn create(&mut self, name: &str, phone: &str) -> Result<CoordinatorEntry> {
        let row = sqlx::query_as::<_, CoordinatorEntry>(
            r#"
            INSERT INTO coordinators (name, phone)
            VALUES ($1, $2)
            RETURNING id, name, phone, created_at
            "#,
        )
        .bind(name)
        .bind(phone)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM coordinators WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
