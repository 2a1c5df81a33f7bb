use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError};
use uuid::Uuid;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            access::Actor,
            adaptors::companies::{
                mutators::{CompanyMutator, CreateCompanyData, PatchCompanyData},
                selectors::CompanySelector,
                spec::CompanyEntry,
            },
            company,
            extract::{ExtractOps, extract_pdf_text},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct CreateCompanyInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub poc_1st: String,
    pub poc_2nd: Option<String>,
    pub hr_name: Option<String>,
    pub hr_phone: Option<String>,
    pub hr_email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct PatchCompanyInput {
    pub name: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub poc_1st: Option<String>,
    pub poc_2nd: Option<String>,
    pub hr_name: Option<String>,
    pub hr_phone: Option<String>,
    pub hr_email: Option<String>,
    pub notes: Option<String>,
    pub job_roles: Option<String>,
    pub package_offered: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub bond_details: Option<String>,
    pub job_location: Option<String>,
    pub selection_process: Option<String>,
}

#[derive(Deserialize)]
pub struct BlacklistInput {
    pub reason: String,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
) -> Result<Json<Vec<CompanyEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    let companies = CompanySelector::new(&mut conn).get_all().await?;
    Ok(Json(companies))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Json(input): Json<CreateCompanyInput>,
) -> Result<Json<CompanyEntry>> {
    input
        .validate()
        .map_err(|e| StandardError::new("ERR-VALIDATION-001").interpolate_err(e.to_string()))?;
    company::validate_pocs(&input.poc_1st, input.poc_2nd.as_deref())?;
    let mut conn = state.db_pool.acquire().await?;
    let created = CompanyMutator::new(&mut conn)
        .create(CreateCompanyData {
            name: input.name,
            website: input.website,
            industry: input.industry,
            poc_1st: input.poc_1st,
            poc_2nd: input.poc_2nd,
            hr_name: input.hr_name,
            hr_phone: input.hr_phone,
            hr_email: input.hr_email,
            notes: input.notes,
        })
        .await?;
    tracing::info!("{} registered company {}", &actor.name, &created.name);
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<PatchCompanyInput>,
) -> Result<Json<CompanyEntry>> {
    if let Some(poc_1st) = &input.poc_1st {
        company::validate_pocs(poc_1st, input.poc_2nd.as_deref())?;
    }
    let mut conn = state.db_pool.acquire().await?;
    let updated = CompanyMutator::new(&mut conn)
        .update(
            id,
            PatchCompanyData {
                name: input.name,
                website: input.website,
                industry: input.industry,
                poc_1st: input.poc_1st,
                poc_2nd: input.poc_2nd,
                hr_name: input.hr_name,
                hr_phone: input.hr_phone,
                hr_email: input.hr_email,
                notes: input.notes,
                job_roles: input.job_roles,
                package_offered: input.package_offered,
                eligibility_criteria: input.eligibility_criteria,
                bond_details: input.bond_details,
                job_location: input.job_location,
                selection_process: input.selection_process,
            },
        )
        .await?
        .ok_or_else(|| StandardError::new("ERR-COMPANY-001"))?;
    Ok(Json(updated))
}

pub async fn blacklist(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    Json(input): Json<BlacklistInput>,
) -> Result<Json<CompanyEntry>> {
    let reason = company::validate_blacklist_reason(&input.reason)?;
    let mut conn = state.db_pool.acquire().await?;
    let updated = CompanyMutator::new(&mut conn)
        .blacklist(id, reason)
        .await?
        .ok_or_else(|| StandardError::new("ERR-COMPANY-001"))?;
    tracing::info!("{} blacklisted {}: {}", &actor.name, &updated.name, reason);
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    actor.ensure_admin()?;
    let mut conn = state.db_pool.acquire().await?;
    if !CompanyMutator::new(&mut conn).delete(id).await? {
        return Err(StandardError::new("ERR-COMPANY-001"));
    }
    Ok(Json(json!({"deleted": id})))
}

/// Registration-form upload: extract the six job fields from the PDF and
/// mark the registration submitted.
pub async fn extract_registration(
    State(state): State<AppState>,
    Extension(actor): Extension<Arc<Actor>>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<CompanyEntry>> {
    let mut data = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StandardError::new("ERR-EXTRACT-001").interpolate_err(e.to_string()))?
    {
        if field.name().unwrap_or("") == "file" {
            let file_name = field.file_name().unwrap_or("unknown").to_string();
            if !file_name.to_lowercase().ends_with(".pdf") {
                return Err(StandardError::new("ERR-EXTRACT-002"));
            }
            data = field
                .bytes()
                .await
                .map_err(|e| StandardError::new("ERR-EXTRACT-001").interpolate_err(e.to_string()))?
                .to_vec();
        }
    }
    if data.is_empty() {
        return Err(StandardError::new("ERR-EXTRACT-001"));
    }

    let text = extract_pdf_text(&data)?;
    let fields = state.ai_client.extract_job_fields(&text).await?;

    let mut conn = state.db_pool.acquire().await?;
    let updated = CompanyMutator::new(&mut conn)
        .set_job_fields(id, &fields)
        .await?
        .ok_or_else(|| StandardError::new("ERR-COMPANY-001"))?;
    tracing::info!(
        "{} extracted registration form for {}",
        &actor.name,
        &updated.name
    );
    Ok(Json(updated))
}
