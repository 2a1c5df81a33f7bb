use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pkg::internal::scheduling::request::RequestStatus;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct DateRequestEntry {
    pub id: Uuid,
    pub company_id: Option<Uuid>,
    pub requested_date: NaiveDate,
    pub coordinator_name: String,
    pub description: String,
    pub status: RequestStatus,
    pub admin_response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, FromRow, Debug, Clone)]
pub struct DateRequestWithCompany {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: DateRequestEntry,
    pub company_name: Option<String>,
}

pub const REQUEST_COLUMNS: &str = "id, company_id, requested_date, coordinator_name, description, \
     status, admin_response, responded_at, created_at, updated_at";

pub const REQUEST_COLUMNS_QUALIFIED: &str =
    "r.id, r.company_id, r.requested_date, r.coordinator_name, r.description, r.status, \
     r.admin_response, r.responded_at, r.created_at, r.updated_at";
