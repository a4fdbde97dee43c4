use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::registrations::common::UpdateRegistrationRequest;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::registration::Model as RegistrationModel;
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

/// PUT /registrationUpdate/{id}
///
/// Replaces the editable fields of a registration. The registrant email
/// and marathon reference form the uniqueness key and are not updatable.
///
/// ### Responses
/// - `200 OK` — the updated record
/// - `400 Bad Request` — validation failure
/// - `404 Not Found`
pub async fn update_registration(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRegistrationRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(format_validation_errors(
                &validation_errors,
            ))),
        )
            .into_response();
    }

    match RegistrationModel::edit(app_state.db(), id, req.into()).await {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                registration,
                "Registration updated successfully",
            )),
        )
            .into_response(),
        Err(DbErr::RecordNotUpdated) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Registration not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
