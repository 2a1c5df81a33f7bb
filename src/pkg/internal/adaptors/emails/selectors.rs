use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::emails::spec::{
        EmailLogEntry, LOG_COLUMNS, TEMPLATE_COLUMNS, TemplateEntry,
    },
    prelude::Result,
};

pub struct EmailSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmailSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmailSelector { pool }
    }

    pub async fn templates(&mut self) -> Result<Vec<TemplateEntry>> {
        let rows = sqlx::query_as::<_, TemplateEntry>(&format!(
            "SELECT {} FROM email_templates ORDER BY name",
            TEMPLATE_COLUMNS
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn template_by_id(&mut self, id: Uuid) -> Result<Option<TemplateEntry>> {
        let row = sqlx::query_as::<_, TemplateEntry>(&format!(
            "SELECT {} FROM email_templates WHERE id = $1",
            TEMPLATE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn logs(&mut self) -> Result<Vec<EmailLogEntry>> {
        let rows = sqlx::query_as::<_, EmailLogEntry>(&format!(
            "SELECT {} FROM email_logs ORDER BY created_at DESC",
            LOG_COLUMNS
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
