//! # Marathon Routes Module
//!
//! Defines and wires up routes for the marathon endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (listings, preview, single record)
//! - `post.rs` — POST handler (create)
//! - `put.rs` — PUT handler (full-field update)
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

use delete::delete_marathon;
use get::{get_limit_marathons, get_marathon, get_marathons, get_marathons_by_creator};
use post::create_marathon;
use put::update_marathon;

/// Builds the marathon route group.
///
/// Routes:
/// - `GET    /marathons`                  → list all (gated; owner check on `email` query param)
/// - `GET    /limitMarathons`             → 6 most recent, for the homepage preview
/// - `GET    /marathons/{id}`             → single record
/// - `GET    /marathonsSpecific/{email}`  → records created by `{email}` (gated; owner check)
/// - `POST   /marathon`                   → create (gated; owner check on body creator email)
/// - `DELETE /marathon/{id}`              → delete
/// - `PUT    /marathonUpdate/{id}`        → full-field replace
pub fn marathons_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/marathons",
            get(get_marathons).route_layer(from_fn(allow_authenticated)),
        )
        .route("/limitMarathons", get(get_limit_marathons))
        .route("/marathons/{id}", get(get_marathon))
        .route(
            "/marathonsSpecific/{email}",
            get(get_marathons_by_creator).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/marathon",
            post(create_marathon).route_layer(from_fn(allow_authenticated)),
        )
        .route("/marathon/{id}", delete(delete_marathon))
        .route("/marathonUpdate/{id}", put(update_marathon))
}
