mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use db::models::marathon::{Model as Marathon, MarathonData};
use helpers::{auth_cookie, make_test_app};
use sea_orm::DbConn;
use serde_json::json;
use tower::ServiceExt;

async fn seed_marathon(db: &DbConn, title: &str, creator_email: &str) -> Marathon {
    let data = MarathonData {
        title: title.to_owned(),
        image: "https://img.example.com/banner.png".to_owned(),
        location: "Cape Town".to_owned(),
        registration_start: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
        registration_end: Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap(),
        marathon_start_date: Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap(),
        running_distance: "25k".to_owned(),
        description: "Coastal route, early start.".to_owned(),
    };
    Marathon::create(db, data, creator_email, "Owner")
        .await
        .unwrap()
}

fn marathon_body(creator_email: &str) -> serde_json::Value {
    json!({
        "title": "Ocean Run",
        "image": "https://img.example.com/banner.png",
        "location": "Cape Town",
        "registration_start": "2025-01-01T08:00:00Z",
        "registration_end": "2025-02-01T18:00:00Z",
        "marathon_start_date": "2025-03-01T06:00:00Z",
        "running_distance": "25k",
        "description": "Coastal route, early start.",
        "creator_email": creator_email,
        "creator_name": "Owner"
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_then_fetch_round_trip() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/marathon")
        .header("Cookie", auth_cookie("owner@example.com"))
        .header("Content-Type", "application/json")
        .body(Body::from(marathon_body("owner@example.com").to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Marathon created successfully");
    let id = json["data"]["id"].as_i64().expect("id must be populated");
    assert_eq!(json["data"]["total_registration_count"], 0);

    let req = Request::builder()
        .method("GET")
        .uri(format!("/marathons/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Ocean Run");
    assert_eq!(json["data"]["location"], "Cape Town");
    assert_eq!(json["data"]["running_distance"], "25k");
    assert_eq!(json["data"]["creator_email"], "owner@example.com");
    assert!(
        json["data"]["registration_start"]
            .as_str()
            .unwrap()
            .starts_with("2025-01-01T08:00:00")
    );
}

#[tokio::test]
async fn create_requires_token() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/marathon")
        .header("Content-Type", "application/json")
        .body(Body::from(marathon_body("owner@example.com").to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_with_foreign_creator_email_is_forbidden() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/marathon")
        .header("Cookie", auth_cookie("someone-else@example.com"))
        .header("Content-Type", "application/json")
        .body(Body::from(marathon_body("owner@example.com").to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Forbidden access");
}

#[tokio::test]
async fn create_with_malformed_creator_email_is_rejected() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/marathon")
        .header("Cookie", auth_cookie("owner@example.com"))
        .header("Content-Type", "application/json")
        .body(Body::from(marathon_body("not-an-email").to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_missing_fields_is_unprocessable() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/marathon")
        .header("Cookie", auth_cookie("owner@example.com"))
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "title": "Ocean Run" }).to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_requires_matching_email_query() {
    let (app, state) = make_test_app().await;
    seed_marathon(state.db(), "Ocean Run", "owner@example.com").await;

    // Matching identity
    let req = Request::builder()
        .method("GET")
        .uri("/marathons?email=owner@example.com")
        .header("Cookie", auth_cookie("owner@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Foreign identity
    let req = Request::builder()
        .method("GET")
        .uri("/marathons?email=owner@example.com")
        .header("Cookie", auth_cookie("intruder@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // No email parameter at all
    let req = Request::builder()
        .method("GET")
        .uri("/marathons")
        .header("Cookie", auth_cookie("owner@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn list_sorts_by_creation_date() {
    let (app, state) = make_test_app().await;
    for title in ["First", "Second", "Third"] {
        seed_marathon(state.db(), title, "owner@example.com").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let req = Request::builder()
        .method("GET")
        .uri("/marathons?email=owner@example.com&sort=asc")
        .header("Cookie", auth_cookie("owner@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    let req = Request::builder()
        .method("GET")
        .uri("/marathons?email=owner@example.com&sort=desc")
        .header("Cookie", auth_cookie("owner@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn limit_marathons_returns_six_most_recent() {
    let (app, state) = make_test_app().await;
    for i in 0..8 {
        seed_marathon(state.db(), &format!("Run {i}"), "owner@example.com").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let req = Request::builder()
        .method("GET")
        .uri("/limitMarathons")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["title"], "Run 7");
    assert_eq!(items[5]["title"], "Run 2");
}

#[tokio::test]
async fn get_unknown_marathon_is_not_found() {
    let (app, _state) = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/marathons/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Marathon not found");
}

#[tokio::test]
async fn marathons_specific_is_owner_scoped() {
    let (app, state) = make_test_app().await;
    seed_marathon(state.db(), "Mine A", "a@example.com").await;
    seed_marathon(state.db(), "Mine B", "a@example.com").await;
    seed_marathon(state.db(), "Theirs", "b@example.com").await;

    let req = Request::builder()
        .method("GET")
        .uri("/marathonsSpecific/a@example.com")
        .header("Cookie", auth_cookie("a@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Someone else's listing
    let req = Request::builder()
        .method("GET")
        .uri("/marathonsSpecific/b@example.com")
        .header("Cookie", auth_cookie("a@example.com"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // No token
    let req = Request::builder()
        .method("GET")
        .uri("/marathonsSpecific/a@example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_replaces_editable_fields() {
    let (app, state) = make_test_app().await;
    let marathon = seed_marathon(state.db(), "Before", "owner@example.com").await;

    let body = json!({
        "title": "After",
        "image": "https://img.example.com/new.png",
        "location": "Durban",
        "registration_start": "2025-04-01T08:00:00Z",
        "registration_end": "2025-05-01T18:00:00Z",
        "marathon_start_date": "2025-06-01T06:00:00Z",
        "running_distance": "10k",
        "description": "New route."
    });

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/marathonUpdate/{}", marathon.id))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "After");
    assert_eq!(json["data"]["location"], "Durban");
    assert_eq!(json["data"]["running_distance"], "10k");
    // Creator identity survives the replace
    assert_eq!(json["data"]["creator_email"], "owner@example.com");

    let req = Request::builder()
        .method("PUT")
        .uri("/marathonUpdate/999")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_marathon_and_registrations() {
    let (app, state) = make_test_app().await;
    let marathon = seed_marathon(state.db(), "Doomed", "owner@example.com").await;

    let registration = db::models::registration::Model::submit(
        state.db(),
        db::models::registration::NewRegistration {
            email: "runner@example.com".to_owned(),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            contact_number: "0821234567".to_owned(),
            additional_info: None,
            marathon_id: marathon.id,
        },
    )
    .await
    .unwrap();

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/marathon/{}", marathon.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        Marathon::get_by_id(state.db(), marathon.id)
            .await
            .unwrap()
            .is_none()
    );
    // Cascade removed the dependent registration
    assert!(
        db::models::registration::Model::get_by_id(state.db(), registration.id)
            .await
            .unwrap()
            .is_none()
    );

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/marathon/{}", marathon.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
