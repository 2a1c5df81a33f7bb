use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pkg::internal::company::{CompanyStatus, RegistrationStatus};

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct CompanyEntry {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub status: CompanyStatus,
    pub registration_status: RegistrationStatus,
    pub poc_1st: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const COMPANY_COLUMNS: &str = "id, name, website, industry, status, registration_status, \
     poc_1st, poc_2nd, hr_name, hr_phone, hr_email, notes, job_roles, package_offered, \
     eligibility_criteria, bond_details, job_location, selection_process, created_at, updated_at";
