//! Random borrowing records for seeded books and members

use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBorrowingRecord, Member},
};

/// Loans already returned
pub const CLOSED_LOANS: usize = 10;
/// Loans still out
pub const OPEN_LOANS: usize = 5;

/// Days between a closed loan's borrow date and today
pub const CLOSED_LOAN_AGE_DAYS: RangeInclusive<i64> = 30..=90;
/// Days a closed loan was kept
pub const CLOSED_LOAN_LENGTH_DAYS: RangeInclusive<i64> = 7..=21;
/// Days between an open loan's borrow date and today
pub const OPEN_LOAN_AGE_DAYS: RangeInclusive<i64> = 1..=14;

/// Plan closed then open loans over `books` and `members`.
///
/// Books and members are drawn uniformly with replacement, so one book can
/// appear in several loans, open ones included.
pub fn plan_loans<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    books: &[Book],
    members: &[Member],
) -> AppResult<Vec<CreateBorrowingRecord>> {
    if books.is_empty() || members.is_empty() {
        return Err(AppError::BadRequest(
            "Borrowing records need at least one book and one member".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(CLOSED_LOANS + OPEN_LOANS);

    for _ in 0..CLOSED_LOANS {
        let (book, member) = pick(rng, books, members)?;
        let borrow_date = today - Duration::days(rng.gen_range(CLOSED_LOAN_AGE_DAYS));
        let return_date = borrow_date + Duration::days(rng.gen_range(CLOSED_LOAN_LENGTH_DAYS));

        records.push(CreateBorrowingRecord {
            book_id: book.id,
            member_id: member.id,
            borrow_date,
            return_date: Some(return_date),
        });
    }

    for _ in 0..OPEN_LOANS {
        let (book, member) = pick(rng, books, members)?;
        let borrow_date = today - Duration::days(rng.gen_range(OPEN_LOAN_AGE_DAYS));

        records.push(CreateBorrowingRecord {
            book_id: book.id,
            member_id: member.id,
            borrow_date,
            return_date: None,
        });
    }

    Ok(records)
}

fn pick<'a, R: Rng + ?Sized>(
    rng: &mut R,
    books: &'a [Book],
    members: &'a [Member],
) -> AppResult<(&'a Book, &'a Member)> {
    let book = books
        .choose(rng)
        .ok_or_else(|| AppError::BadRequest("No books to lend".to_string()))?;
    let member = members
        .choose(rng)
        .ok_or_else(|| AppError::BadRequest("No members to lend to".to_string()))?;
    Ok((book, member))
}
