//! Data models for the library

pub mod book;
pub mod borrowing;
pub mod member;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use borrowing::{BorrowingHistoryEntry, BorrowingQuery, BorrowingRecord, CreateBorrowingRecord};
pub use member::{CreateMember, Member};
