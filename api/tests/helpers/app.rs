use api::auth::generate_jwt;
use api::routes::routes;
use axum::Router;
use util::state::AppState;

/// Builds a test router over a fresh in-memory database with migrations
/// applied. Returns the router plus the state so tests can seed data
/// directly through the db crate.
pub async fn make_test_app() -> (Router, AppState) {
    if std::env::var("JWT_SECRET").is_err() {
        unsafe {
            std::env::set_var("JWT_SECRET", "test-secret");
        }
    }

    let db = db::test_utils::setup_test_db().await;
    let state = AppState::new(db);
    let app = routes(state.clone());
    (app, state)
}

/// Cookie header value carrying a freshly issued token for `email`.
pub fn auth_cookie(email: &str) -> String {
    let (token, _) = generate_jwt(email);
    format!("token={}", token)
}
