use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::access::{AccessStatus, Actor, Profile},
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn list_pending(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<Profile>>> {
    actor.ensure_admin()?;
    let profiles = Profile::list_by_status(&state.db_pool, AccessStatus::Pending).await?;
    Ok(Json(profiles))
}

pub async fn approve(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>> {
    actor.ensure_admin()?;
    let profile = Profile::set_access(&state.db_pool, &user_id, AccessStatus::Approved).await?;
    tracing::info!("{} approved portal access for {}", &actor.name, &profile.username);
    Ok(Json(profile))
}

pub async fn reject(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>> {
    actor.ensure_admin()?;
    let profile = Profile::set_access(&state.db_pool, &user_id, AccessStatus::Rejected).await?;
    tracing::info!("{} rejected portal access for {}", &actor.name, &profile.username);
    Ok(Json(json!({"rejected": profile.user_id})))
}
