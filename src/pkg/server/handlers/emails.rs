use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError};
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::emails::{
                mutators::{CreateTemplateData, EmailMutator, PatchTemplateData, RecordEmailData},
                selectors::EmailSelector,
                spec::{EmailLogEntry, TemplateEntry},
            },
            email::{
                self, EmailStatus,
                outreach::{missing_required, parse_placeholders, render},
            },
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateTemplateInput {
    pub name: String,
    pub subject: String,
    pub body: String,
    #[serde(default = "default_placeholders")]
    pub placeholders: Value,
}

fn default_placeholders() -> Value {
    json!([])
}

#[derive(Deserialize, Default)]
pub struct PatchTemplateInput {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub placeholders: Option<Value>,
}

#[derive(Deserialize)]
pub struct SendEmailInput {
    pub template_id: Uuid,
    pub recipient_email: String,
    pub company_name: String,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

pub async fn list_templates(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<TemplateEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let templates = EmailSelector::new(&mut conn).templates().await?;
    Ok(Json(templates))
}

pub async fn create_template(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateTemplateInput>,
) -> Result<Json<TemplateEntry>> {
    if input.name.trim().is_empty() || input.subject.trim().is_empty() {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    // Rejects malformed descriptors before they reach the send path.
    parse_placeholders(&input.placeholders)?;
    let mut conn = state.db_pool.acquire().await?;
    let created = EmailMutator::new(&mut conn)
        .create_template(CreateTemplateData {
            name: input.name,
            subject: input.subject,
            body: input.body,
            placeholders: input.placeholders,
        })
        .await?;
    tracing::info!("{} added email template {}", &actor.name, &created.name);
    Ok(Json(created))
}

pub async fn update_template(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchTemplateInput>,
) -> Result<Json<TemplateEntry>> {
    if let Some(placeholders) = &input.placeholders {
        parse_placeholders(placeholders)?;
    }
    let mut conn = state.db_pool.acquire().await?;
    let updated = EmailMutator::new(&mut conn)
        .update_template(
            id,
            PatchTemplateData {
                name: input.name,
                subject: input.subject,
                body: input.body,
                placeholders: input.placeholders,
            },
        )
        .await?
        .ok_or_else(|| StandardError::new("ERR-EMAIL-001"))?;
    Ok(Json(updated))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if !EmailMutator::new(&mut conn).delete_template(id).await? {
        return Err(StandardError::new("ERR-EMAIL-001"));
    }
    Ok(Json(json!({"deleted": id})))
}

/// Renders the template, delivers it, and records the attempt either way.
/// The audit row exists even when the transport refuses the message.
pub async fn send(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<SendEmailInput>,
) -> Result<Json<EmailLogEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let template = EmailSelector::new(&mut conn)
        .template_by_id(input.template_id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-EMAIL-001"))?;

    let placeholders = parse_placeholders(&template.placeholders)?;
    let missing = missing_required(&placeholders, &input.values);
    if !missing.is_empty() {
        return Err(
            StandardError::new("ERR-VALIDATION-001").interpolate_err(missing.join(", "))
        );
    }

    let subject = render(&template.subject, &input.values);
    let body = render(&template.body, &input.values);

    let outcome = email::deliver(&input.recipient_email, &subject, &body, true).await;
    let status = match &outcome {
        Ok(()) => EmailStatus::Sent,
        Err(e) => {
            tracing::error!("outreach to {} failed: {:?}", &input.recipient_email, e);
            EmailStatus::Failed
        }
    };

    let log = EmailMutator::new(&mut conn)
        .record(RecordEmailData {
            template_id: Some(template.id),
            recipient_email: input.recipient_email,
            company_name: input.company_name,
            subject,
            body,
            status,
        })
        .await?;
    tracing::info!(
        "{} sent {} to {}: {:?}",
        &actor.name,
        &template.name,
        &log.recipient_email,
        log.status
    );
    Ok(Json(log))
}

pub async fn logs(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<EmailLogEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let logs = EmailSelector::new(&mut conn).logs().await?;
    Ok(Json(logs))
}
