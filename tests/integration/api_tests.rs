//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_server::{api, seed, AppState};

use crate::common::{memory_repository, today};

async fn app() -> Router {
    let repository = memory_repository().await;
    api::create_router(AppState::new(repository))
}

async fn seeded_app() -> Router {
    let repository = memory_repository().await;
    let mut rng = StdRng::seed_from_u64(11);
    seed::run(&repository, &mut rng, today(), &mut Vec::new())
        .await
        .expect("Seeding failed");
    api::create_router(AppState::new(repository))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, get("/api/v1/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app().await;

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books"].is_object());
    assert!(body["paths"]["/borrowing-history"].is_object());
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = app().await;

    let (status, created) = send(
        &app,
        post(
            "/api/v1/books",
            json!({"title": "Dune", "author": "Frank Herbert", "isbn": "978-0-44-117271-9"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("No book ID");

    let (status, book) = send(&app, get(&format!("/api/v1/books/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["isbn"], "978-0-44-117271-9");

    let (status, books) = send(&app, get("/api/v1/books")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(books.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_isbn_conflicts() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        post(
            "/api/v1/books",
            json!({"title": "Another 1984", "author": "Someone", "isbn": "978-0-45-152493-5"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");
}

#[tokio::test]
async fn test_missing_book_is_not_found() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/v1/books/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_member_validation_and_conflict() {
    let app = seeded_app().await;

    let (status, _) = send(
        &app,
        post("/api/v1/members", json!({"name": "No Mail", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post(
            "/api/v1/members",
            json!({"name": "Emma Again", "email": "Emma.Thompson@gmail.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, members) = send(&app, get("/api/v1/members")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().unwrap().len(), 15);
}

#[tokio::test]
async fn test_active_filter() {
    let app = seeded_app().await;

    let (_, all) = send(&app, get("/api/v1/borrowing-history")).await;
    assert_eq!(all.as_array().unwrap().len(), 15);

    let (_, open) = send(&app, get("/api/v1/borrowing-history?active=true")).await;
    let open = open.as_array().unwrap();
    assert_eq!(open.len(), 5);
    assert!(open.iter().all(|r| r["return_date"].is_null()));

    let (_, closed) = send(&app, get("/api/v1/borrowing-history?active=false")).await;
    let closed = closed.as_array().unwrap();
    assert_eq!(closed.len(), 10);
    assert!(closed.iter().all(|r| r["return_date"].is_string()));
}

#[tokio::test]
async fn test_record_loan_and_member_history() {
    let app = app().await;

    let (_, book) = send(
        &app,
        post(
            "/api/v1/books",
            json!({"title": "The Hobbit", "author": "J.R.R. Tolkien", "isbn": "978-0-54-792822-7"}),
        ),
    )
    .await;
    let (_, member) = send(
        &app,
        post("/api/v1/members", json!({"name": "Henry Lewis", "email": "henry.lewis@gmail.com"})),
    )
    .await;
    let member_id = member["id"].as_i64().unwrap();

    let (status, record) = send(
        &app,
        post(
            "/api/v1/borrowing-history",
            json!({
                "book_id": book["id"],
                "member_id": member_id,
                "borrow_date": "2024-05-01",
                "return_date": null
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["borrow_date"], "2024-05-01");
    assert!(record["return_date"].is_null());

    let record_id = record["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, get(&format!("/api/v1/borrowing-history/{}", record_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, record);

    let (status, history) = send(
        &app,
        get(&format!("/api/v1/members/{}/borrowing-history", member_id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["title"], "The Hobbit");
}

#[tokio::test]
async fn test_record_loan_rejects_bad_input() {
    let app = seeded_app().await;

    let (status, _) = send(
        &app,
        post(
            "/api/v1/borrowing-history",
            json!({
                "book_id": 1,
                "member_id": 1,
                "borrow_date": "2024-05-10",
                "return_date": "2024-05-01"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post(
            "/api/v1/borrowing-history",
            json!({"book_id": 999, "member_id": 1, "borrow_date": "2024-05-10"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/api/v1/members/999/borrowing-history")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
