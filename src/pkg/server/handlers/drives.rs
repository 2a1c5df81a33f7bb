use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError};
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::{
                blocked_dates::selectors::BlockedDateSelector,
                companies::selectors::CompanySelector,
                drives::{
                    mutators::{CreateDriveData, CreateDriveOutcome, DriveMutator, PatchDriveData},
                    selectors::DriveSelector,
                    spec::{CampusDriveEntry, CampusDriveWithCompany},
                },
            },
            scheduling::{
                conflict,
                drive::{DriveStatus, LockDecision, ensure_release_allowed, plan_lock},
            },
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct ListDrivesQuery {
    pub company_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ConflictQuery {
    pub date: NaiveDate,
    pub company_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct CreateDriveInput {
    pub company_id: Uuid,
    pub drive_date: NaiveDate,
    pub drive_time: Option<String>,
    pub venue: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct PatchDriveInput {
    pub drive_time: Option<String>,
    pub venue: Option<String>,
    pub notes: Option<String>,
    pub registered_count: Option<i32>,
    pub appeared_count: Option<i32>,
    pub selected_count: Option<i32>,
    pub status: Option<DriveStatus>,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Query(query): Query<ListDrivesQuery>,
) -> Result<Json<Vec<CampusDriveWithCompany>>> {
    let mut conn = state.db_pool.acquire().await?;
    let drives = DriveSelector::new(&mut conn).get_all(query.company_id).await?;
    Ok(Json(drives))
}

/// Calendar preview: reports both conflict dimensions for a single day so the
/// form can warn before the coordinator submits.
pub async fn conflicts(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Query(query): Query<ConflictQuery>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let blocked = BlockedDateSelector::new(&mut conn).get_all().await?;
    let scheduled = DriveSelector::new(&mut conn).get_scheduled().await?;
    let day = conflict::evaluate(query.date, query.company_id, &blocked, &scheduled);
    Ok(Json(json!({
        "date": query.date,
        "blocked": day.blocked,
        "locked": day.locked,
    })))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateDriveInput>,
) -> Result<Json<CampusDriveEntry>> {
    let mut txn = state.db_pool.begin_txn().await?;
    let blocked = BlockedDateSelector::new(&mut txn).get_all().await?;
    let scheduled = DriveSelector::new(&mut txn).get_scheduled().await?;
    match plan_lock(input.drive_date, input.company_id, &blocked, &scheduled) {
        LockDecision::Grant => {}
        LockDecision::DateTaken(holder) => {
            let holder_company = CompanySelector::new(&mut txn)
                .get_by_id(holder.company_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_else(|| "another company".to_string());
            return Err(StandardError::new("ERR-DRIVE-LOCKED").interpolate_err(format!(
                "{} for {}",
                holder.coordinator_name, holder_company
            )));
        }
        LockDecision::NeedsApproval(range) => {
            return Err(
                StandardError::new("ERR-DRIVE-BLOCKED").interpolate_err(range.reason.clone())
            );
        }
    }
    let outcome = DriveMutator::new(&mut txn)
        .create(CreateDriveData {
            company_id: input.company_id,
            coordinator_name: actor.name.clone(),
            drive_date: input.drive_date,
            drive_time: input.drive_time,
            venue: input.venue,
            notes: input.notes,
        })
        .await?;
    let drive = match outcome {
        CreateDriveOutcome::Created(drive) => drive,
        // The unique index caught a concurrent lock the snapshot missed.
        CreateDriveOutcome::DateTaken => {
            return Err(StandardError::new("ERR-DRIVE-LOCKED")
                .interpolate_err("another coordinator".into()));
        }
    };
    txn.commit().await?;
    tracing::info!(
        "{} locked {} for a campus drive",
        &actor.name,
        &drive.drive_date
    );
    Ok(Json(drive))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchDriveInput>,
) -> Result<Json<CampusDriveEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let updated = DriveMutator::new(&mut conn)
        .update(
            id,
            PatchDriveData {
                drive_time: input.drive_time,
                venue: input.venue,
                notes: input.notes,
                registered_count: input.registered_count,
                appeared_count: input.appeared_count,
                selected_count: input.selected_count,
                status: input.status,
            },
        )
        .await?
        .ok_or_else(|| StandardError::new("ERR-DRIVE-001"))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    let drive = DriveSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-DRIVE-001"))?;
    ensure_release_allowed(&drive, &actor.name)?;
    DriveMutator::new(&mut conn).delete(id).await?;
    tracing::info!("{} released {}", &actor.name, &drive.drive_date);
    Ok(Json(json!({"deleted": id})))
}
