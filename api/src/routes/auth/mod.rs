//! Identity token endpoints.
//!
//! - `POST /jwt` → issue a signed identity token and set the token cookie
//! - `GET /logout` → clear the token cookie
//!
//! Logout is a pure client-state instruction: there is no server-side
//! revocation list, so an issued token stays valid until natural expiry.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod get;
pub mod post;

use get::logout;
use post::issue_token;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout))
}
