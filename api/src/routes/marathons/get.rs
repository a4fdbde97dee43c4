use crate::auth::AuthUser;
use crate::response::ApiResponse;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use db::models::marathon::Model as MarathonModel;
use serde::Deserialize;
use util::state::AppState;

/// Number of marathons shown in the homepage preview.
const HOME_PREVIEW_LIMIT: u64 = 6;

#[derive(Debug, Deserialize)]
pub struct MarathonListQuery {
    pub email: Option<String>,
    pub sort: Option<String>,
}

/// GET /marathons?email=...&sort=asc|desc
///
/// Lists every marathon, optionally sorted by creation date. The gate has
/// already verified the token; this handler additionally requires the
/// `email` query parameter to match the token identity.
///
/// ### Responses
/// - `200 OK` — all marathons
/// - `403 Forbidden` — `email` missing or different from the token identity
pub async fn get_marathons(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Query(params): Query<MarathonListQuery>,
) -> Response {
    if params.email.as_deref() != Some(claims.sub.as_str()) {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Forbidden access")),
        )
            .into_response();
    }

    match MarathonModel::get_all(app_state.db(), params.sort.as_deref()).await {
        Ok(marathons) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathons,
                "Marathons retrieved successfully",
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

/// GET /limitMarathons
///
/// The six most recently created marathons, newest first. Unauthenticated;
/// feeds the homepage preview.
pub async fn get_limit_marathons(State(app_state): State<AppState>) -> Response {
    match MarathonModel::get_latest(app_state.db(), HOME_PREVIEW_LIMIT).await {
        Ok(marathons) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathons,
                "Marathons retrieved successfully",
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

/// GET /marathons/{id}
///
/// Single marathon by id. Unauthenticated.
///
/// ### Responses
/// - `200 OK` — the record
/// - `404 Not Found`
pub async fn get_marathon(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    match MarathonModel::get_by_id(app_state.db(), id).await {
        Ok(Some(marathon)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathon,
                "Marathon retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Marathon not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}

/// GET /marathonsSpecific/{email}
///
/// Marathons created by the given email. The path email must match the
/// token identity.
pub async fn get_marathons_by_creator(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(email): Path<String>,
) -> Response {
    if claims.sub != email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Forbidden access")),
        )
            .into_response();
    }

    match MarathonModel::get_by_creator_email(app_state.db(), &email).await {
        Ok(marathons) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathons,
                "Marathons retrieved successfully",
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
