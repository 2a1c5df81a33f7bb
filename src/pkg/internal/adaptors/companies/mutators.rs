use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::companies::spec::{COMPANY_COLUMNS, CompanyEntry},
        company::{CompanyStatus, RegistrationStatus},
        extract::JobPostingFields,
    },
    prelude::Result,
};

pub struct CreateCompanyData {
    pub name: String,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub poc_1st: String,
    pub poc_2nd: Option<String>,
    pub hr_name: Option<String>,
    pub hr_phone: Option<String>,
    pub hr_email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Default)]
pub struct PatchCompanyData {
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

pub struct CompanyMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CompanyMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CompanyMutator { pool }
    }

    pub async fn create(&mut self, company: CreateCompanyData) -> Result<CompanyEntry> {
        let row = sqlx::query_as::<_, CompanyEntry>(&format!(
            r#"
            INSERT INTO companies
                (name, website, industry, poc_1st, poc_2nd, hr_name, hr_phone, hr_email, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(&company.name)
        .bind(&company.website)
        .bind(&company.industry)
        .bind(&company.poc_1st)
        .bind(&company.poc_2nd)
        .bind(&company.hr_name)
        .bind(&company.hr_phone)
        .bind(&company.hr_email)
        .bind(&company.notes)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: Uuid, patch: PatchCompanyData) -> Result<Option<CompanyEntry>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE companies SET updated_at = now()");
        macro_rules! push_field {
            ($field:ident) => {
                if let Some(value) = &patch.$field {
                    qb.push(concat!(", ", stringify!($field), " = "))
                        .push_bind(value);
                }
            };
        }
        push_field!(name);
        push_field!(website);
        push_field!(industry);
        push_field!(poc_1st);
        push_field!(poc_2nd);
        push_field!(hr_name);
        push_field!(hr_phone);
        push_field!(hr_email);
        push_field!(notes);
        push_field!(job_roles);
        push_field!(package_offered);
        push_field!(eligibility_criteria);
        push_field!(bond_details);
        push_field!(job_location);
        push_field!(selection_process);
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(format!(" RETURNING {}", COMPANY_COLUMNS));
        let row = qb
            .build_query_as::<CompanyEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    /// Destructive by design: the reason replaces whatever notes were there.
    pub async fn blacklist(&mut self, id: Uuid, reason: &str) -> Result<Option<CompanyEntry>> {
        let row = sqlx::query_as::<_, CompanyEntry>(&format!(
            r#"
            UPDATE companies SET status = $2, notes = $3, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(id)
        .bind(CompanyStatus::Blacklisted)
        .bind(reason)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    /// Populates the extracted job fields and marks the registration form
    /// submitted in the same statement.
    pub async fn set_job_fields(
        &mut self,
        id: Uuid,
        fields: &JobPostingFields,
    ) -> Result<Option<CompanyEntry>> {
        let row = sqlx::query_as::<_, CompanyEntry>(&format!(
            r#"
            UPDATE companies SET
                job_roles = $2,
                package_offered = $3,
                eligibility_criteria = $4,
                bond_details = $5,
                job_location = $6,
                selection_process = $7,
                registration_status = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        ))
        .bind(id)
        .bind(&fields.job_roles)
        .bind(&fields.package_offered)
        .bind(&fields.eligibility_criteria)
        .bind(&fields.bond_details)
        .bind(&fields.job_location)
        .bind(&fields.selection_process)
        .bind(RegistrationStatus::Submitted)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
