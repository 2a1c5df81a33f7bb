use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::{
    PgPool,
    prelude::{FromRow, Type},
};
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::internal::email::{SendEmail, access_code::AccessCodeTemplate},
    prelude::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "access_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "app_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coordinator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type)]
#[sqlx(type_name = "token_status", rename_all = "lowercase")]
pub enum TokenStatus {
    Pending,
    Verified,
    Rejected,
    Expired,
}

#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub status: AccessStatus,
    pub role: Role,
}

#[derive(FromRow, Debug)]
pub struct AuthToken {
    pub token: Uuid,
    pub user_id: String,
    pub code: String,
    pub expiry: DateTime<Utc>,
    pub status: TokenStatus,
}

/// The acting identity threaded explicitly through every operation instead
/// of being read from ambient session state.
#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    pub role: Role,
}

impl Actor {
    /// Only approved profiles may act on the portal.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        if profile.status != AccessStatus::Approved {
            return Err(StandardError::new("ERR-AUTH-004"));
        }
        Ok(Actor {
            name: profile.display_name.clone(),
            role: profile.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn ensure_admin(&self) -> Result<()> {
        if !self.is_admin() {
            return Err(StandardError::new("ERR-AUTH-005"));
        }
        Ok(())
    }
}

impl Profile {
    pub async fn create(
        pool: &PgPool,
        email: &str,
        username: &str,
        display_name: &str,
    ) -> Result<Self> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, email, username, display_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET display_name = $4
            RETURNING user_id, email, username, display_name, status, role
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(email)
        .bind(username)
        .bind(display_name)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }

    pub async fn retrieve_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, Profile>(
            "select user_id, email, username, display_name, status, role
             from profiles where email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn list_by_status(pool: &PgPool, status: AccessStatus) -> Result<Vec<Self>> {
        Ok(sqlx::query_as::<_, Profile>(
            "select user_id, email, username, display_name, status, role
             from profiles where status = $1 order by created_at",
        )
        .bind(status)
        .fetch_all(pool)
        .await?)
    }

    /// Admin verdict on a pending signup; gates all portal access.
    pub async fn set_access(pool: &PgPool, user_id: &str, status: AccessStatus) -> Result<Self> {
        sqlx::query_as::<_, Profile>(
            r#"
            update profiles set status = $2, updated_at = now()
            where user_id = $1
            returning user_id, email, username, display_name, status, role
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StandardError::new("ERR-AUTH-001"))
    }

    pub async fn issue_token(&self, pool: &PgPool) -> Result<()> {
        let code = AuthToken::generate_code();
        tracing::debug!("issued code for {}", &self.username);
        sqlx::query(
            r#"
            INSERT INTO tokens (user_id, code, expiry, status)
            VALUES ($1, $2, NOW() + interval '1 hour', $3)
            "#,
        )
        .bind(&self.user_id)
        .bind(&code)
        .bind(TokenStatus::Pending)
        .execute(pool)
        .await?;
        AccessCodeTemplate {
            name: &self.display_name,
            code: &code,
        }
        .send(&self.email)?;
        Ok(())
    }
}

impl AuthToken {
    fn generate_code() -> String {
        let mut rng = rand::rng();
        (0..6)
            .map(|_| rng.random_range(0..10).to_string())
            .collect()
    }

    pub async fn issue_for(pool: &PgPool, email: &str) -> Result<Profile> {
        let profile = Profile::retrieve_by_email(pool, email)
            .await?
            .ok_or_else(|| StandardError::new("ERR-AUTH-001"))?;
        profile.issue_token(pool).await?;
        Ok(profile)
    }

    pub async fn pending_for(pool: &PgPool, user_id: &str) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, AuthToken>(
            "select token, user_id, code, expiry, status from tokens
             where user_id = $1 and status = $2 and expiry > now()
             order by expiry desc limit 1",
        )
        .bind(user_id)
        .bind(TokenStatus::Pending)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn mark(&self, pool: &PgPool, status: TokenStatus) -> Result<()> {
        sqlx::query("update tokens set status = $2 where token = $1")
            .bind(self.token)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn expire_all(pool: &PgPool, user_id: &str) -> Result<()> {
        sqlx::query("update tokens set status = $3 where user_id = $1 and status = $2")
            .bind(user_id)
            .bind(TokenStatus::Verified)
            .bind(TokenStatus::Expired)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Resolves a cookie token to its profile; only verified, unexpired
    /// tokens pass.
    pub async fn check_token_validity(pool: &PgPool, token_str: &str) -> Result<Profile> {
        let token = token_str
            .parse::<Uuid>()
            .map_err(|_| StandardError::new("ERR-AUTH-002"))?;
        let found = sqlx::query_as::<_, AuthToken>(
            "select token, user_id, code, expiry, status from tokens
             where token = $1 and status = $2 and expiry > now()",
        )
        .bind(token)
        .bind(TokenStatus::Verified)
        .fetch_optional(pool)
        .await?;
        let Some(found) = found else {
            return Err(StandardError::new("ERR-AUTH-001"));
        };
        let profile = sqlx::query_as::<_, Profile>(
            "select user_id, email, username, display_name, status, role
             from profiles where user_id = $1",
        )
        .bind(&found.user_id)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(status: AccessStatus, role: Role) -> Profile {
        Profile {
            user_id: Uuid::new_v4().to_string(),
            email: "priya@campus.edu".into(),
            username: "priya".into(),
            display_name: "Priya".into(),
            status,
            role,
        }
    }

    #[test]
    fn only_approved_profiles_become_actors() {
        assert!(Actor::from_profile(&profile(AccessStatus::Pending, Role::Coordinator)).is_err());
        assert!(Actor::from_profile(&profile(AccessStatus::Rejected, Role::Coordinator)).is_err());
        let actor =
            Actor::from_profile(&profile(AccessStatus::Approved, Role::Coordinator)).unwrap();
        assert_eq!(actor.name, "Priya");
    }

    #[test]
    fn admin_gate_checks_the_role_flag() {
        let coordinator =
            Actor::from_profile(&profile(AccessStatus::Approved, Role::Coordinator)).unwrap();
        assert!(!coordinator.is_admin());
        assert!(coordinator.ensure_admin().is_err());

        let admin = Actor::from_profile(&profile(AccessStatus::Approved, Role::Admin)).unwrap();
        assert!(admin.ensure_admin().is_ok());
    }

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..20 {
            let code = AuthToken::generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
