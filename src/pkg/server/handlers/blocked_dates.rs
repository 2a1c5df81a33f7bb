use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::blocked_dates::{
                mutators::BlockedDateMutator, selectors::BlockedDateSelector,
                spec::BlockedDateEntry,
            },
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateBlockedDateInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<BlockedDateEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let ranges = BlockedDateSelector::new(&mut conn).get_all().await?;
    Ok(Json(ranges))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateBlockedDateInput>,
) -> Result<Json<BlockedDateEntry>> {
    actor.ensure_admin()?;
    if input.reason.trim().is_empty() || input.end_date < input.start_date {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    let mut conn = state.db_pool.acquire().await?;
    let created = BlockedDateMutator::new(&mut conn)
        .create(
            input.start_date,
            input.end_date,
            input.reason.trim(),
            &actor.name,
        )
        .await?;
    tracing::info!(
        "{} blocked {} through {}: {}",
        &actor.name,
        &created.start_date,
        &created.end_date,
        &created.reason
    );
    Ok(Json(created))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    actor.ensure_admin()?;
    let mut conn = state.db_pool.acquire().await?;
    if !BlockedDateMutator::new(&mut conn).delete(id).await? {
        return Err(StandardError::new("ERR-BLOCKED-001"));
    }
    Ok(Json(json!({"deleted": id})))
}
