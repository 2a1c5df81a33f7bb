use chrono::NaiveDate;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::date_requests::spec::{DateRequestEntry, REQUEST_COLUMNS},
        scheduling::request::{Decision, RequestStatus},
    },
    prelude::Result,
};

pub struct CreateDateRequestData {
    pub company_id: Option<Uuid>,
    pub requested_date: NaiveDate,
    pub coordinator_name: String,
    pub description: String,
}

pub struct DateRequestMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DateRequestMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DateRequestMutator { pool }
    }

    pub async fn create(&mut self, request: CreateDateRequestData) -> Result<DateRequestEntry> {
        let row = sqlx::query_as::<_, DateRequestEntry>(&format!(
            r#"
            INSERT INTO date_requests (company_id, requested_date, coordinator_name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            REQUEST_COLUMNS
        ))
        .bind(request.company_id)
        .bind(request.requested_date)
        .bind(&request.coordinator_name)
        .bind(&request.description)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// The pending guard is repeated in SQL so a racing second decision
    /// updates zero rows instead of rewriting a terminal request.
    pub async fn decide(&mut self, id: Uuid, decision: &Decision) -> Result<Option<DateRequestEntry>> {
        let row = sqlx::query_as::<_, DateRequestEntry>(&format!(
            r#"
            UPDATE date_requests
            SET status = $2, admin_response = $3, responded_at = now(), updated_at = now()
            WHERE id = $1 AND status = $4
            RETURNING {}
            "#,
            REQUEST_COLUMNS
        ))
        .bind(id)
        .bind(decision.status())
        .bind(decision.response())
        .bind(RequestStatus::Pending)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
