use crate::auth::AuthUser;
use crate::response::ApiResponse;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use db::models::registration::Model as RegistrationModel;
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegistrationListQuery {
    pub search: Option<String>,
}

/// GET /registationsSpecific/{email}?search=...
///
/// Registrations placed by the given email, optionally narrowed to
/// marathon titles containing `search` (case-insensitive). The path email
/// must match the token identity.
///
/// ### Responses
/// - `200 OK` — the matching registrations
/// - `403 Forbidden` — path email differs from the token identity
pub async fn get_registrations_by_email(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(email): Path<String>,
    Query(params): Query<RegistrationListQuery>,
) -> Response {
    if claims.sub != email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Forbidden access")),
        )
            .into_response();
    }

    match RegistrationModel::list_by_email(app_state.db(), &email, params.search.as_deref()).await
    {
        Ok(registrations) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                registrations,
                "Registrations retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
