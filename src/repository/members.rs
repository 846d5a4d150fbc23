//! Members repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use super::BatchStore;
use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Get member by email (case-insensitive)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE LOWER(email) = LOWER(?)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(member)
    }

    /// Create a member
    pub async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            "INSERT INTO members (name, email) VALUES (?, ?) RETURNING *",
        )
        .bind(&member.name)
        .bind(&member.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Count members
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl BatchStore<CreateMember> for MembersRepository {
    type Record = Member;

    async fn insert_batch(&self, staged: &[CreateMember]) -> AppResult<Vec<i64>> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(staged.len());

        for member in staged {
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO members (name, email) VALUES (?, ?) RETURNING id",
            )
            .bind(&member.name)
            .bind(&member.email)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;
        Ok(ids)
    }

    async fn fetch(&self, id: i64) -> AppResult<Member> {
        self.get_by_id(id).await
    }
}
