use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use standard_error::{Interpolate, StandardError};
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::{
                coordinators::selectors::CoordinatorSelector,
                date_requests::{
                    mutators::{CreateDateRequestData, DateRequestMutator},
                    selectors::DateRequestSelector,
                    spec::{DateRequestEntry, DateRequestWithCompany},
                },
            },
            scheduling::request::{Decision, ensure_pending, validate_description},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateDateRequestInput {
    pub company_id: Option<Uuid>,
    pub requested_date: NaiveDate,
    pub description: String,
}

#[derive(Deserialize)]
pub struct ApproveInput {
    pub response: Option<String>,
}

#[derive(Deserialize)]
pub struct RejectInput {
    pub response: String,
}

/// Admins see the whole queue, coordinators only their own requests.
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<DateRequestWithCompany>>> {
    let mut conn = state.db_pool.acquire().await?;
    let filter = (!actor.is_admin()).then_some(actor.name.as_str());
    let requests = DateRequestSelector::new(&mut conn).get_all(filter).await?;
    Ok(Json(requests))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateDateRequestInput>,
) -> Result<Json<DateRequestEntry>> {
    let description = validate_description(&input.description)?;
    let mut conn = state.db_pool.acquire().await?;
    if !CoordinatorSelector::new(&mut conn)
        .exists_by_name(&actor.name)
        .await?
    {
        return Err(StandardError::new("ERR-REQ-003").interpolate_err(actor.name.clone()));
    }
    let created = DateRequestMutator::new(&mut conn)
        .create(CreateDateRequestData {
            company_id: input.company_id,
            requested_date: input.requested_date,
            coordinator_name: actor.name.clone(),
            description: description.to_string(),
        })
        .await?;
    tracing::info!(
        "{} requested {} for approval",
        &actor.name,
        &created.requested_date
    );
    Ok(Json(created))
}

pub async fn approve(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<ApproveInput>,
) -> Result<Json<DateRequestEntry>> {
    let decision = Decision::Approve {
        response: input.response,
    };
    decide(state, actor, id, decision).await
}

pub async fn reject(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<RejectInput>,
) -> Result<Json<DateRequestEntry>> {
    let decision = Decision::Reject {
        response: input.response,
    };
    decide(state, actor, id, decision).await
}

async fn decide(
    state: AppState,
    actor: Arc<Actor>,
    id: Uuid,
    decision: Decision,
) -> Result<Json<DateRequestEntry>> {
    actor.ensure_admin()?;
    decision.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let request = DateRequestSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-REQ-001"))?;
    ensure_pending(request.status)?;
    // A second decision racing past the check updates zero rows here.
    let decided = DateRequestMutator::new(&mut conn)
        .decide(id, &decision)
        .await?
        .ok_or_else(|| StandardError::new("ERR-REQ-005"))?;
    tracing::info!(
        "{} marked {}'s request for {} as {:?}",
        &actor.name,
        &decided.coordinator_name,
        &decided.requested_date,
        decided.status
    );
    Ok(Json(decided))
}
