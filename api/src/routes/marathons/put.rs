use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::marathons::common::UpdateMarathonRequest;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use db::models::marathon::Model as MarathonModel;
use sea_orm::DbErr;
use util::state::AppState;
use validator::Validate;

/// PUT /marathonUpdate/{id}
///
/// Full replace of the editable field set. The creator identity and the
/// registration counter are untouched.
///
/// ### Responses
/// - `200 OK` — the updated record
/// - `400 Bad Request` — validation failure
/// - `404 Not Found`
pub async fn update_marathon(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMarathonRequest>,
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

    match MarathonModel::edit(app_state.db(), id, req.into()).await {
        Ok(marathon) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathon,
                "Marathon updated successfully",
            )),
        )
            .into_response(),
        Err(DbErr::RecordNotUpdated) => (
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
