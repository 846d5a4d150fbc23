//! Borrowing record (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// A book lent to a member. `return_date` is `None` while the book is out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowingRecord {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl BorrowingRecord {
    /// Whether the book is still on loan
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Create borrowing record request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateBorrowingRecord {
    pub book_id: i64,
    pub member_id: i64,
    pub borrow_date: NaiveDate,
    /// Leave empty for a book that is still out
    pub return_date: Option<NaiveDate>,
}

impl CreateBorrowingRecord {
    /// Check that a present return date does not precede the borrow date
    pub fn check_dates(&self) -> AppResult<()> {
        match self.return_date {
            Some(returned) if returned < self.borrow_date => Err(AppError::Validation(format!(
                "return_date {} is before borrow_date {}",
                returned, self.borrow_date
            ))),
            _ => Ok(()),
        }
    }
}

/// Borrowing history filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BorrowingQuery {
    /// `true` for open loans only, `false` for returned loans only
    pub active: Option<bool>,
}

/// One line of a member's borrowing history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowingHistoryEntry {
    pub id: i64,
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}
