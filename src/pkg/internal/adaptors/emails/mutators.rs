use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::emails::spec::{EmailLogEntry, LOG_COLUMNS, TEMPLATE_COLUMNS, TemplateEntry},
        email::EmailStatus,
    },
    prelude::Result,
};

pub struct CreateTemplateData {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub placeholders: serde_json::Value,
}

#[derive(Default)]
pub struct PatchTemplateData {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub placeholders: Option<serde_json::Value>,
}

pub struct RecordEmailData {
    pub template_id: Option<Uuid>,
    pub recipient_email: String,
    pub company_name: String,
    pub subject: String,
    pub body: String,
    pub status: EmailStatus,
}

pub struct EmailMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmailMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmailMutator { pool }
    }

    pub async fn create_template(&mut self, template: CreateTemplateData) -> Result<TemplateEntry> {
        let row = sqlx::query_as::<_, TemplateEntry>(&format!(
            r#"
            INSERT INTO email_templates (name, subject, body, placeholders)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            TEMPLATE_COLUMNS
        ))
        .bind(&template.name)
        .bind(&template.subject)
        .bind(&template.body)
        .bind(&template.placeholders)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_template(
        &mut self,
        id: Uuid,
        patch: PatchTemplateData,
    ) -> Result<Option<TemplateEntry>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE email_templates SET updated_at = now()");
        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(subject) = &patch.subject {
            qb.push(", subject = ").push_bind(subject);
        }
        if let Some(body) = &patch.body {
            qb.push(", body = ").push_bind(body);
        }
        if let Some(placeholders) = &patch.placeholders {
            qb.push(", placeholders = ").push_bind(placeholders);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", TEMPLATE_COLUMNS));
        let row = qb
            .build_query_as::<TemplateEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete_template(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM email_templates WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Audit row for every outbound attempt; `sent_at` is only set when the
    /// transport accepted the message.
    pub async fn record(&mut self, log: RecordEmailData) -> Result<EmailLogEntry> {
        let row = sqlx::query_as::<_, EmailLogEntry>(&format!(
            r#"
            INSERT INTO email_logs
                (template_id, recipient_email, company_name, subject, body, status, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6,
                    CASE WHEN $6 = 'sent'::email_status THEN now() ELSE NULL END)
            RETURNING {}
            "#,
            LOG_COLUMNS
        ))
        .bind(log.template_id)
        .bind(&log.recipient_email)
        .bind(&log.company_name)
        .bind(&log.subject)
        .bind(&log.body)
        .bind(log.status)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
