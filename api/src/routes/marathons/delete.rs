use crate::response::ApiResponse;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use db::models::marathon::Model as MarathonModel;
use util::state::AppState;

/// DELETE /marathon/{id}
///
/// Deletes a marathon. Dependent registrations go with it via the store's
/// cascading foreign key.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
pub async fn delete_marathon(State(app_state): State<AppState>, Path(id): Path<i64>) -> Response {
    match MarathonModel::delete(app_state.db(), id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Marathon not found")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Marathon deleted successfully")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
