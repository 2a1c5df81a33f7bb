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
            adaptors::contacts::{
                mutators::{ContactMutator, CreateContactData, PatchContactData},
                selectors::ContactSelector,
                spec::ContactEntry,
            },
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct CreateContactInput {
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Deserialize, Default)]
pub struct PatchContactInput {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Vec<ContactEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let contacts = ContactSelector::new(&mut conn)
        .for_company(company_id)
        .await?;
    Ok(Json(contacts))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(company_id): Path<Uuid>,
    Json(input): Json<CreateContactInput>,
) -> Result<Json<ContactEntry>> {
    if input.name.trim().is_empty() {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    let mut txn = state.db_pool.begin_txn().await?;
    let created = ContactMutator::new(&mut txn)
        .create(CreateContactData {
            company_id,
            name: input.name,
            designation: input.designation,
            phone: input.phone,
            email: input.email,
            is_primary: input.is_primary,
        })
        .await?;
    txn.commit().await?;
    tracing::info!("{} added contact {}", &actor.name, &created.name);
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path((_company_id, id)): Path<(Uuid, Uuid)>,
    Json(input): Json<PatchContactInput>,
) -> Result<Json<ContactEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let updated = ContactMutator::new(&mut conn)
        .update(
            id,
            PatchContactData {
                name: input.name,
                designation: input.designation,
                phone: input.phone,
                email: input.email,
            },
        )
        .await?
        .ok_or_else(|| StandardError::new("ERR-CONTACT-001"))?;
    Ok(Json(updated))
}

pub async fn set_primary(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path((company_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ContactEntry>> {
    let mut txn = state.db_pool.begin_txn().await?;
    let contact = ContactMutator::new(&mut txn)
        .set_primary(id, company_id)
        .await?;
    txn.commit().await?;
    tracing::info!(
        "{} made {} the primary contact",
        &actor.name,
        &contact.name
    );
    Ok(Json(contact))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path((_company_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>> {
    let mut conn = state.db_pool.acquire().await?;
    if !ContactMutator::new(&mut conn).delete(id).await? {
        return Err(StandardError::new("ERR-CONTACT-001"));
    }
    Ok(Json(json!({"deleted": id})))
}
