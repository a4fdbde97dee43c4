//! # Registration Routes Module
//!
//! Defines and wires up routes for the registration endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handler (owner-scoped listing with search filter)
//! - `post.rs` — POST handler (the submission workflow)
//! - `put.rs` — PUT handler (editable-field update)
//! - `delete.rs` — DELETE handler
//! - `common.rs` — shared request types

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_registration;
use get::get_registrations_by_email;
use post::submit_registration;
use put::update_registration;

/// Builds the registration route group.
///
/// Routes:
/// - `GET    /registationsSpecific/{email}` → registrations by `{email}` (gated; owner check; optional `search`)
/// - `POST   /registration`                 → submit a registration
/// - `DELETE /registation/{id}`             → delete
/// - `PUT    /registrationUpdate/{id}`      → editable-field replace
pub fn registrations_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/registationsSpecific/{email}",
            get(get_registrations_by_email).route_layer(from_fn(allow_authenticated)),
        )
        .route("/registration", post(submit_registration))
        .route("/registation/{id}", delete(delete_registration))
        .route("/registrationUpdate/{id}", put(update_registration))
}
