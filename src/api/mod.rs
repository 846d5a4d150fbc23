//! API handlers for the library REST endpoints

pub mod books;
pub mod borrowing;
pub mod health;
pub mod members;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route("/members/:id", get(members::get_member))
        .route(
            "/members/:id/borrowing-history",
            get(members::get_member_history),
        )
        // Borrowing history
        .route(
            "/borrowing-history",
            get(borrowing::list_records).post(borrowing::create_record),
        )
        .route("/borrowing-history/:id", get(borrowing::get_record))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
