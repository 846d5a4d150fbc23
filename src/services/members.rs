//! Member management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        borrowing::BorrowingHistoryEntry,
        member::{CreateMember, Member},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }

    pub async fn get_member(&self, id: i64) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    /// Create a new member. Emails are unique, compared case-insensitively.
    pub async fn create_member(&self, member: CreateMember) -> AppResult<Member> {
        member.validate()?;

        if self.repository.members.get_by_email(&member.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let created = self.repository.members.create(&member).await?;
        tracing::info!("Members: created member id={}", created.id);
        Ok(created)
    }

    /// Borrowing history of a member
    pub async fn borrowing_history(&self, member_id: i64) -> AppResult<Vec<BorrowingHistoryEntry>> {
        // Verify member exists
        self.repository.members.get_by_id(member_id).await?;
        self.repository.borrowing.history_for_member(member_id).await
    }
}
