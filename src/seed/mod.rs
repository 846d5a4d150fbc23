//! One-shot population of an empty store with sample data.
//!
//! Books and members come from fixed lists in [`data`]; borrowing records are
//! planned by [`loans::plan_loans`] from a caller-supplied RNG. Each step is
//! staged and flushed as its own batch, so a failing step leaves the store as
//! it was before that step.

pub mod data;
pub mod loans;

use std::io::Write;

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    error::AppResult,
    models::{Book, BorrowingRecord, CreateBook, CreateMember, Member},
    repository::{Batch, Repository},
};

/// Everything created by one seeding run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub borrowing_records: Vec<BorrowingRecord>,
}

/// Insert the fixed catalog
pub async fn seed_books(repository: &Repository) -> AppResult<Vec<Book>> {
    let batch: Batch<CreateBook> = data::CATALOG
        .iter()
        .map(|(title, author, isbn)| CreateBook::new(title, author, isbn))
        .collect();

    let books = batch.flush(&repository.books).await?;
    tracing::debug!(count = books.len(), "Books flushed");
    Ok(books)
}

/// Insert the fixed member roster
pub async fn seed_members(repository: &Repository) -> AppResult<Vec<Member>> {
    let batch: Batch<CreateMember> = data::ROSTER
        .iter()
        .map(|(name, email)| CreateMember::new(name, email))
        .collect();

    let members = batch.flush(&repository.members).await?;
    tracing::debug!(count = members.len(), "Members flushed");
    Ok(members)
}

/// Insert random closed and open loans over `books` and `members`
pub async fn seed_borrowing_records<R: Rng + ?Sized>(
    repository: &Repository,
    rng: &mut R,
    today: NaiveDate,
    books: &[Book],
    members: &[Member],
) -> AppResult<Vec<BorrowingRecord>> {
    let mut batch = Batch::new();
    for record in loans::plan_loans(rng, today, books, members)? {
        batch.stage(record);
    }

    let records = batch.flush(&repository.borrowing).await?;
    tracing::debug!(count = records.len(), "Borrowing records flushed");
    Ok(records)
}

/// Seed books, then members, then borrowing records, writing progress to `out`
pub async fn run<R, W>(
    repository: &Repository,
    rng: &mut R,
    today: NaiveDate,
    out: &mut W,
) -> AppResult<SeedReport>
where
    R: Rng + ?Sized,
    W: Write,
{
    writeln!(out, "Seeding database with sample data...")?;

    let books = seed_books(repository).await?;
    writeln!(out, "Seeded {} books", books.len())?;

    let members = seed_members(repository).await?;
    writeln!(out, "Seeded {} members", members.len())?;

    let borrowing_records =
        seed_borrowing_records(repository, rng, today, &books, &members).await?;
    writeln!(out, "Seeded {} borrowing records", borrowing_records.len())?;

    writeln!(out, "Database seeding completed successfully!")?;
    tracing::info!(
        books = books.len(),
        members = members.len(),
        borrowing_records = borrowing_records.len(),
        open_loans = borrowing_records.iter().filter(|r| r.is_open()).count(),
        "Seeding finished"
    );

    Ok(SeedReport {
        books,
        members,
        borrowing_records,
    })
}
