use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::coordinators::{
                mutators::CoordinatorMutator, selectors::CoordinatorSelector,
                spec::CoordinatorEntry,
            },
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateCoordinatorInput {
    pub name: String,
    pub phone: String,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<CoordinatorEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let coordinators = CoordinatorSelector::new(&mut conn).get_all().await?;
    Ok(Json(coordinators))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateCoordinatorInput>,
) -> Result<Json<CoordinatorEntry>> {
    actor.ensure_admin()?;
    if input.name.trim().is_empty() || input.phone.trim().is_empty() {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    let mut conn = state.db_pool.acquire().await?;
    let created = CoordinatorMutator::new(&mut conn)
        .create(input.name.trim(), input.phone.trim())
        .await?;
    tracing::info!("{} added {} to the roster", &actor.name, &created.name);
    Ok(Json(created))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    actor.ensure_admin()?;
    let mut conn = state.db_pool.acquire().await?;
    if !CoordinatorMutator::new(&mut conn).delete(id).await? {
        return Err(StandardError::new("ERR-COORD-001"));
    }
    Ok(Json(json!({"deleted": id})))
}
