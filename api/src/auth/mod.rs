pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

/// Name of the HTTP-only cookie carrying the identity token.
pub const TOKEN_COOKIE: &str = "token";

/// Identity tokens live for a fixed 20 days from issuance.
pub const TOKEN_LIFETIME_DAYS: i64 = 20;

/// Generates a signed identity token and its expiry timestamp for a user email.
pub fn generate_jwt(email: &str) -> (String, String) {
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

    let expiry = Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS);

    let claims = Claims {
        sub: email.to_owned(),
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
