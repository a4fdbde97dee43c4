use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use std::env;

use crate::auth::TOKEN_COOKIE;
use crate::auth::claims::{AuthUser, Claims};

/// Implements extraction of `AuthUser` from the request's token cookie.
///
/// Reads the identity token from the HTTP-only `token` cookie, verifies the
/// JWT using the secret from the `JWT_SECRET` environment variable, and
/// extracts the claims into an `AuthUser` instance.
///
/// # Errors
/// - Returns `401 Unauthorized` if the cookie is missing, or the token is
///   invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Missing token cookie"))?;

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or((StatusCode::UNAUTHORIZED, "Missing token cookie"))?;

        let token_data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(env::var("JWT_SECRET").unwrap().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

        Ok(AuthUser(token_data.claims))
    }
}
