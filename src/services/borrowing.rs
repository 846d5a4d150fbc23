//! Borrowing history service

use crate::{
    error::AppResult,
    models::borrowing::{BorrowingQuery, BorrowingRecord, CreateBorrowingRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowingService {
    repository: Repository,
}

impl BorrowingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_records(&self, query: &BorrowingQuery) -> AppResult<Vec<BorrowingRecord>> {
        self.repository.borrowing.list(query).await
    }

    pub async fn get_record(&self, id: i64) -> AppResult<BorrowingRecord> {
        self.repository.borrowing.get_by_id(id).await
    }

    /// Record a loan. The same book may be on several open loans at once.
    pub async fn create_record(&self, record: CreateBorrowingRecord) -> AppResult<BorrowingRecord> {
        record.check_dates()?;

        // Verify book and member exist
        self.repository.books.get_by_id(record.book_id).await?;
        self.repository.members.get_by_id(record.member_id).await?;

        let created = self.repository.borrowing.create(&record).await?;
        tracing::info!(
            "Borrowing: book {} lent to member {} on {}",
            created.book_id,
            created.member_id,
            created.borrow_date
        );
        Ok(created)
    }
}
