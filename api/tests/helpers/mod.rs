pub mod app;

pub use app::{auth_cookie, make_test_app};
