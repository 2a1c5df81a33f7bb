use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::access::{Actor, AuthToken},
        server::state::AppState,
    },
    prelude::Result,
};

pub const TOKEN_COOKIE: &str = "_Host_cd_token";
pub const EMAIL_COOKIE: &str = "_Host_cd_email";

/// Resolves the token cookie to an approved profile and threads the actor
/// through the request extensions. Everything behind this layer sees an
/// explicit actor, never ambient session state.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let jar = CookieJar::from_headers(&headers);
    let maybe_cookie = jar.get(TOKEN_COOKIE).filter(|c| !c.value().is_empty());
    if let Some(cookie) = maybe_cookie {
        match AuthToken::check_token_validity(&state.db_pool, cookie.value()).await {
            Ok(profile) => {
                let actor = Actor::from_profile(&profile)
                    .map_err(|mut e| e.code(StatusCode::FORBIDDEN))?;
                request.extensions_mut().insert(Arc::new(actor));
                return Ok(next.run(request).await);
            }
            Err(_) => {}
        }
    }
    tracing::warn!("token missing or invalid, authentication denied");
    Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))
}
