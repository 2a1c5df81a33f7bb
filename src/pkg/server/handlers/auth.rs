use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError};
use validator::Validate;

use crate::{
    pkg::{
        internal::access::{AuthToken, Profile, TokenStatus},
        server::{
            middlewares::authn::{EMAIL_COOKIE, TOKEN_COOKIE},
            state::AppState,
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct SignupInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
}

#[derive(Deserialize, Validate)]
pub struct VerifyInput {
    #[validate(length(equal = 6))]
    pub code: String,
}

/// Creates a pending profile and emails a sign-in code. The profile stays
/// unusable until an admin approves it.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupInput>,
) -> Result<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| StandardError::new("ERR-VALIDATION-001").interpolate_err(e.to_string()))?;
    let profile = Profile::create(
        &state.db_pool,
        &input.email,
        &input.username,
        &input.display_name,
    )
    .await?;
    profile.issue_token(&state.db_pool).await?;
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("{}={}", EMAIL_COOKIE, &profile.email))?,
    );
    Ok((headers, Json(json!({"status": profile.status}))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let profile = AuthToken::issue_for(&state.db_pool, &input.email).await?;
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("{}={}", EMAIL_COOKIE, &profile.email))?,
    );
    Ok((headers, Json(json!({"sent": true}))))
}

pub async fn verify(
    headers: HeaderMap,
    State(state): State<AppState>,
    Json(input): Json<VerifyInput>,
) -> Result<(HeaderMap, Json<Value>)> {
    let pool = &*state.db_pool;
    let jar = CookieJar::from_headers(&headers);
    let mut headers = HeaderMap::new();
    let Some(email) = jar.get(EMAIL_COOKIE).filter(|c| !c.value().is_empty()) else {
        return Err(StandardError::new("ERR-AUTH-001"));
    };
    let profile = Profile::retrieve_by_email(pool, email.value())
        .await?
        .ok_or_else(|| StandardError::new("ERR-AUTH-001"))?;
    let token = AuthToken::pending_for(pool, &profile.user_id).await?;
    tracing::debug!("verifying code for {}", &profile.username);
    let Some(token) = token else {
        profile.issue_token(pool).await?;
        return Ok((headers, Json(json!({"verified": false, "resent": true}))));
    };
    if input.code != token.code {
        token.mark(pool, TokenStatus::Rejected).await?;
        return Err(StandardError::new("ERR-AUTH-003"));
    }
    token.mark(pool, TokenStatus::Verified).await?;
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("{}={}", TOKEN_COOKIE, &token.token))?,
    );
    Ok((headers, Json(json!({"verified": true}))))
}

pub async fn logout(headers: HeaderMap, State(state): State<AppState>) -> Result<Json<Value>> {
    let jar = CookieJar::from_headers(&headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE).filter(|c| !c.value().is_empty()) {
        let profile = AuthToken::check_token_validity(&state.db_pool, cookie.value()).await?;
        AuthToken::expire_all(&state.db_pool, &profile.user_id).await?;
        tracing::info!("{} logged out", &profile.display_name);
    }
    Ok(Json(json!({"logged_out": true})))
}
