use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::marathons::common::CreateMarathonRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use db::models::marathon::Model as MarathonModel;
use util::state::AppState;
use validator::Validate;

/// POST /marathon
///
/// Create a marathon. The gate has already verified the token; the creator
/// email embedded in the payload must match the token identity, so nobody
/// can create events on someone else's behalf.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Ocean Run",
///   "image": "https://img.example.com/banner.png",
///   "location": "Cape Town",
///   "registration_start": "2025-01-01T08:00:00Z",
///   "registration_end": "2025-02-01T18:00:00Z",
///   "marathon_start_date": "2025-03-01T06:00:00Z",
///   "running_distance": "25k",
///   "description": "Coastal route, early start.",
///   "creator_email": "owner@example.com",
///   "creator_name": "Owner"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the created record, id populated
/// - `400 Bad Request` — validation failure
/// - `403 Forbidden` — creator email differs from the token identity
pub async fn create_marathon(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateMarathonRequest>,
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

    if claims.sub != req.creator_email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Forbidden access")),
        )
            .into_response();
    }

    match MarathonModel::create(
        app_state.db(),
        req.data(),
        &req.creator_email,
        &req.creator_name,
    )
    .await
    {
        Ok(marathon) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                marathon,
                "Marathon created successfully",
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
