use crate::auth::TOKEN_COOKIE;
use crate::response::ApiResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// GET /logout
///
/// Clears the token cookie by replacing it with an immediately-expiring
/// one. The token itself stays valid until its natural expiry — stateless
/// tokens cannot be revoked server-side.
pub async fn logout(jar: CookieJar) -> Response {
    let mut cookie = Cookie::from(TOKEN_COOKIE);
    cookie.set_path("/");

    (
        StatusCode::OK,
        jar.remove(cookie),
        Json(ApiResponse::success((), "Logged out successfully")),
    )
        .into_response()
}
