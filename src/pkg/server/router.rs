use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, patch, post};
use axum::Router;

use super::handlers;
use super::handlers::auth::{login, logout, signup, verify};
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/logout", post(logout))
        .route("/access/pending", get(handlers::access::list_pending))
        .route("/access/:user_id/approve", post(handlers::access::approve))
        .route("/access/:user_id/reject", post(handlers::access::reject))
        .route("/companies", get(handlers::companies::list))
        .route("/companies", post(handlers::companies::create))
        .route("/companies/:id", patch(handlers::companies::update))
        .route("/companies/:id", delete(handlers::companies::delete))
        .route("/companies/:id/blacklist", post(handlers::companies::blacklist))
        .route(
            "/companies/:id/registration",
            post(handlers::companies::extract_registration),
        )
        .route("/companies/:company_id/contacts", get(handlers::contacts::list))
        .route("/companies/:company_id/contacts", post(handlers::contacts::create))
        .route(
            "/companies/:company_id/contacts/:id",
            patch(handlers::contacts::update),
        )
        .route(
            "/companies/:company_id/contacts/:id",
            delete(handlers::contacts::delete),
        )
        .route(
            "/companies/:company_id/contacts/:id/primary",
            post(handlers::contacts::set_primary),
        )
        .route("/drives", get(handlers::drives::list))
        .route("/drives", post(handlers::drives::create))
        .route("/drives/conflicts", get(handlers::drives::conflicts))
        .route("/drives/:id", patch(handlers::drives::update))
        .route("/drives/:id", delete(handlers::drives::delete))
        .route("/blocked-dates", get(handlers::blocked_dates::list))
        .route("/blocked-dates", post(handlers::blocked_dates::create))
        .route("/blocked-dates/:id", delete(handlers::blocked_dates::delete))
        .route("/date-requests", get(handlers::date_requests::list))
        .route("/date-requests", post(handlers::date_requests::create))
        .route(
            "/date-requests/:id/approve",
            post(handlers::date_requests::approve),
        )
        .route(
            "/date-requests/:id/reject",
            post(handlers::date_requests::reject),
        )
        .route("/tasks", get(handlers::tasks::list))
        .route("/tasks", post(handlers::tasks::create))
        .route("/tasks/:id", patch(handlers::tasks::update))
        .route("/tasks/:id", delete(handlers::tasks::delete))
        .route("/coordinators", get(handlers::coordinators::list))
        .route("/coordinators", post(handlers::coordinators::create))
        .route("/coordinators/:id", delete(handlers::coordinators::delete))
        .route("/email/templates", get(handlers::emails::list_templates))
        .route("/email/templates", post(handlers::emails::create_template))
        .route("/email/templates/:id", patch(handlers::emails::update_template))
        .route("/email/templates/:id", delete(handlers::emails::delete_template))
        .route("/email/send", post(handlers::emails::send))
        .route("/email/logs", get(handlers::emails::logs))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/verify", post(verify))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
