use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::companies::spec::{COMPANY_COLUMNS, CompanyEntry},
    prelude::Result,
};

pub struct CompanySelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanySelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanySelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<CompanyEntry>> {
        let rows = sqlx::query_as::<_, CompanyEntry>(&format!(
            "SELECT {} FROM companies ORDER BY name",
            COMPANY_COLUMNS
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<CompanyEntry>> {
        let row = sqlx::query_as::<_, CompanyEntry>(&format!(
            "SELECT {} FROM companies WHERE id = $1",
            COMPANY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
