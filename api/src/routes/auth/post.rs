use crate::auth::{TOKEN_COOKIE, generate_jwt};
use crate::response::ApiResponse;
use crate::routes::common::format_validation_errors;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use util::config;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Serialize, Default)]
pub struct TokenResponse {
    pub expires_at: String,
}

/// POST /jwt
///
/// Issue an identity token for the given email and deliver it as an
/// HTTP-only cookie. In production the cookie is `Secure` with
/// `SameSite=None` so the hosted frontend can send it cross-site; in
/// development it stays `SameSite=Lax`.
///
/// ### Request Body
/// ```json
/// { "email": "runner@example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` — cookie set, `data.expires_at` carries the expiry timestamp
/// - `400 Bad Request` — malformed email
pub async fn issue_token(jar: CookieJar, Json(req): Json<TokenRequest>) -> Response {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<TokenResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        )
            .into_response();
    }

    let (token, expires_at) = generate_jwt(&req.email);

    let mut cookie = Cookie::new(TOKEN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    if config::is_production() {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }

    (
        StatusCode::OK,
        jar.add(cookie),
        Json(ApiResponse::success(
            TokenResponse { expires_at },
            "Token issued successfully",
        )),
    )
        .into_response()
}
