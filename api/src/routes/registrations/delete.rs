use crate::response::ApiResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::registration::Model as RegistrationModel;
use util::state::AppState;

/// DELETE /registation/{id}
///
/// Deletes a registration; the marathon's registration counter is
/// decremented in the same transaction so it keeps tracking the number of
/// live registrations.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
pub async fn delete_registration(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match RegistrationModel::delete(app_state.db(), id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Registration deleted successfully")),
        )
            .into_response(),
        Ok(false) => (
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
