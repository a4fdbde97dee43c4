//! HTTP route entry point.
//!
//! Routes are organized by domain, each wired up in its own module:
//! - `/health` → health check endpoint (public)
//! - `/jwt`, `/logout` → identity token issuance and revocation (public)
//! - marathon endpoints → listing, preview, CRUD (owner-scoped listings
//!   pass through the authentication gate)
//! - registration endpoints → submission workflow, owner-scoped listing,
//!   update, delete
//!
//! The route *paths* match the original wire surface of this service
//! exactly, spelling and all, so existing clients keep working.

use crate::routes::auth::auth_routes;
use crate::routes::health::health_routes;
use crate::routes::marathons::marathons_routes;
use crate::routes::registrations::registrations_routes;
use axum::{Router, routing::get};
use util::state::AppState;

pub mod auth;
pub mod common;
pub mod health;
pub mod marathons;
pub mod registrations;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/health", health_routes())
        .merge(auth_routes())
        .merge(marathons_routes())
        .merge(registrations_routes())
        .with_state(app_state)
}

/// GET /
///
/// Plain-text service greeting, kept from the very first revision of this
/// service.
async fn index() -> &'static str {
    "Marathon server is running"
}
