//! Borrowing records repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use super::BatchStore;
use crate::{
    error::{AppError, AppResult},
    models::borrowing::{
        BorrowingHistoryEntry, BorrowingQuery, BorrowingRecord, CreateBorrowingRecord,
    },
};

#[derive(Clone)]
pub struct BorrowingRepository {
    pool: Pool<Sqlite>,
}

impl BorrowingRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List borrowing records, optionally restricted to open or returned loans
    pub async fn list(&self, query: &BorrowingQuery) -> AppResult<Vec<BorrowingRecord>> {
        let sql = match query.active {
            Some(true) => {
                "SELECT * FROM borrowing_records WHERE return_date IS NULL ORDER BY borrow_date, id"
            }
            Some(false) => {
                "SELECT * FROM borrowing_records WHERE return_date IS NOT NULL ORDER BY borrow_date, id"
            }
            None => "SELECT * FROM borrowing_records ORDER BY borrow_date, id",
        };

        let records = sqlx::query_as::<_, BorrowingRecord>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    /// Get borrowing record by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BorrowingRecord> {
        sqlx::query_as::<_, BorrowingRecord>("SELECT * FROM borrowing_records WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Borrowing record with id {} not found", id))
            })
    }

    /// Borrowing history of one member, most recent first
    pub async fn history_for_member(&self, member_id: i64) -> AppResult<Vec<BorrowingHistoryEntry>> {
        let entries = sqlx::query_as::<_, BorrowingHistoryEntry>(
            r#"
            SELECT r.id, r.book_id, b.title, b.author, r.borrow_date, r.return_date
            FROM borrowing_records r
            JOIN books b ON b.id = r.book_id
            WHERE r.member_id = ?
            ORDER BY r.borrow_date DESC, r.id DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    /// Create a borrowing record
    pub async fn create(&self, record: &CreateBorrowingRecord) -> AppResult<BorrowingRecord> {
        let row = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            INSERT INTO borrowing_records (book_id, member_id, borrow_date, return_date)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(record.book_id)
        .bind(record.member_id)
        .bind(record.borrow_date)
        .bind(record.return_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Count all borrowing records
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowing_records")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl BatchStore<CreateBorrowingRecord> for BorrowingRepository {
    type Record = BorrowingRecord;

    async fn insert_batch(&self, staged: &[CreateBorrowingRecord]) -> AppResult<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(staged.len());

        for record in staged {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO borrowing_records (book_id, member_id, borrow_date, return_date)
                VALUES (?, ?, ?, ?)
                RETURNING id
                "#,
            )
            .bind(record.book_id)
            .bind(record.member_id)
            .bind(record.borrow_date)
            .bind(record.return_date)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;
        Ok(ids)
    }

    async fn fetch(&self, id: i64) -> AppResult<BorrowingRecord> {
        self.get_by_id(id).await
    }
}
