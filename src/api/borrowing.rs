//! Borrowing history endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrowing::{BorrowingQuery, BorrowingRecord, CreateBorrowingRecord},
    AppState,
};

/// List borrowing records
#[utoipa::path(
    get,
    path = "/borrowing-history",
    tag = "borrowing",
    params(BorrowingQuery),
    responses(
        (status = 200, description = "Borrowing records", body = Vec<BorrowingRecord>)
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<BorrowingQuery>,
) -> AppResult<Json<Vec<BorrowingRecord>>> {
    let records = state.services.borrowing.list_records(&query).await?;
    Ok(Json(records))
}

/// Get borrowing record by ID
#[utoipa::path(
    get,
    path = "/borrowing-history/{id}",
    tag = "borrowing",
    params(
        ("id" = i64, Path, description = "Borrowing record ID")
    ),
    responses(
        (status = 200, description = "Borrowing record", body = BorrowingRecord),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BorrowingRecord>> {
    let record = state.services.borrowing.get_record(id).await?;
    Ok(Json(record))
}

/// Record a loan
#[utoipa::path(
    post,
    path = "/borrowing-history",
    tag = "borrowing",
    request_body = CreateBorrowingRecord,
    responses(
        (status = 201, description = "Record created", body = BorrowingRecord),
        (status = 400, description = "Return date before borrow date", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_record(
    State(state): State<AppState>,
    Json(record): Json<CreateBorrowingRecord>,
) -> AppResult<(StatusCode, Json<BorrowingRecord>)> {
    let created = state.services.borrowing.create_record(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
