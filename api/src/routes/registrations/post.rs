use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use crate::routes::registrations::common::RegistrationRequest;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::models::registration::{Model as RegistrationModel, SubmitError};
use util::state::AppState;
use validator::Validate;

/// POST /registration
///
/// Submits a registration through the workflow: at most one registration
/// per (email, marathon) pair, and a successful submission bumps the
/// marathon's registration counter in the same transaction.
///
/// ### Request Body
/// ```json
/// {
///   "email": "runner@example.com",
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "contact_number": "0821234567",
///   "additional_info": "Vegetarian race pack",
///   "marathon_id": 1
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — the persisted record
/// - `400 Bad Request` — validation failure
/// - `403 Forbidden` — already registered for this marathon
/// - `404 Not Found` — the marathon does not exist
pub async fn submit_registration(
    State(app_state): State<AppState>,
    Json(req): Json<RegistrationRequest>,
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

    match RegistrationModel::submit(app_state.db(), req.into()).await {
        Ok(registration) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                registration,
                "Registration submitted successfully",
            )),
        )
            .into_response(),
        Err(e @ SubmitError::AlreadyRegistered) => (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error(e.to_string())),
        )
            .into_response(),
        Err(e @ SubmitError::MarathonNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(e.to_string())),
        )
            .into_response(),
        Err(SubmitError::Db(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {}", e))),
        )
            .into_response(),
    }
}
