use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pkg::internal::email::EmailStatus;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct TemplateEntry {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub placeholders: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct EmailLogEntry {
    pub id: Uuid,
    pub template_id: Option<Uuid>,
    pub recipient_email: String,
    pub company_name: String,
    pub subject: String,
    pub body: String,
    pub status: EmailStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

pub const TEMPLATE_COLUMNS: &str =
    "id, name, subject, body, placeholders, created_at, updated_at";

pub const LOG_COLUMNS: &str =
    "id, template_id, recipient_email, company_name, subject, body, status, sent_at, created_at";
