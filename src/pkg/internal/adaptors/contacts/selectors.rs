use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::contacts::spec::{CONTACT_COLUMNS, ContactEntry},
    prelude::Result,
};

pub struct ContactSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ContactSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ContactSelector { pool }
    }

    pub async fn for_company(&mut self, company_id: Uuid) -> Result<Vec<ContactEntry>> {
        let rows = sqlx::query_as::<_, ContactEntry>(&format!(
            "SELECT {} FROM company_contacts WHERE company_id = $1
             ORDER BY is_primary DESC, name",
            CONTACT_COLUMNS
        ))
        .bind(company_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<ContactEntry>> {
        let row = sqlx::query_as::<_, ContactEntry>(&format!(
            "SELECT {} FROM company_contacts WHERE id = $1",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
