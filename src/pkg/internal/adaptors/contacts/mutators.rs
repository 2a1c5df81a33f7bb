use sqlx::{PgConnection, Postgres, QueryBuilder};
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::contacts::spec::{CONTACT_COLUMNS, ContactEntry},
    prelude::Result,
};

pub struct CreateContactData {
    pub company_id: Uuid,
    pub name: String,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_primary: bool,
}

#[derive(Default)]
pub struct PatchContactData {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

pub struct ContactMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ContactMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ContactMutator { pool }
    }

    pub async fn create(&mut self, contact: CreateContactData) -> Result<ContactEntry> {
        if contact.is_primary {
            sqlx::query("UPDATE company_contacts SET is_primary = false WHERE company_id = $1")
                .bind(contact.company_id)
                .execute(&mut *self.pool)
                .await?;
        }
        let row = sqlx::query_as::<_, ContactEntry>(&format!(
            r#"
            INSERT INTO company_contacts (company_id, name, designation, phone, email, is_primary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(contact.company_id)
        .bind(&contact.name)
        .bind(&contact.designation)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.is_primary)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: Uuid, patch: PatchContactData) -> Result<Option<ContactEntry>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE company_contacts SET updated_at = now()");
        if let Some(name) = &patch.name {
            qb.push(", name = ").push_bind(name);
        }
        if let Some(designation) = &patch.designation {
            qb.push(", designation = ").push_bind(designation);
        }
        if let Some(phone) = &patch.phone {
            qb.push(", phone = ").push_bind(phone);
        }
        if let Some(email) = &patch.email {
            qb.push(", email = ").push_bind(email);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", CONTACT_COLUMNS));
        let row = qb
            .build_query_as::<ContactEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    /// Clear-then-set inside the caller's transaction, so the company is
    /// never left without a primary contact on a partial failure.
    pub async fn set_primary(&mut self, id: Uuid, company_id: Uuid) -> Result<ContactEntry> {
        sqlx::query("UPDATE company_contacts SET is_primary = false WHERE company_id = $1")
            .bind(company_id)
            .execute(&mut *self.pool)
            .await?;
        let row = sqlx::query_as::<_, ContactEntry>(&format!(
            r#"
            UPDATE company_contacts SET is_primary = true, updated_at = now()
            WHERE id = $1 AND company_id = $2
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(id)
        .bind(company_id)
        .fetch_optional(&mut *self.pool)
        .await?
        .ok_or_else(|| StandardError::new("ERR-CONTACT-001"))?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM company_contacts WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
