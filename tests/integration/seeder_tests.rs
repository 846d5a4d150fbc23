//! Seeder tests

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use library_server::{
    error::AppError,
    models::BorrowingQuery,
    seed::{self, data, loans},
};

use crate::common::{memory_repository, today};

#[tokio::test]
async fn test_run_reports_progress() {
    let repository = memory_repository().await;
    let mut rng = StdRng::seed_from_u64(1);
    let mut out = Vec::new();

    let report = seed::run(&repository, &mut rng, today(), &mut out)
        .await
        .expect("Seeding failed");

    assert_eq!(report.books.len(), 20);
    assert_eq!(report.members.len(), 15);
    assert_eq!(report.borrowing_records.len(), 15);

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Seeding database with sample data...",
            "Seeded 20 books",
            "Seeded 15 members",
            "Seeded 15 borrowing records",
            "Database seeding completed successfully!",
        ]
    );
}

#[tokio::test]
async fn test_catalog_and_roster_exist_exactly_once() {
    let repository = memory_repository().await;
    let mut rng = StdRng::seed_from_u64(2);
    seed::run(&repository, &mut rng, today(), &mut Vec::new())
        .await
        .unwrap();

    for (title, author, isbn) in data::CATALOG {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM books WHERE title = ? AND author = ? AND isbn = ?",
        )
        .bind(title)
        .bind(author)
        .bind(isbn)
        .fetch_one(&repository.pool)
        .await
        .unwrap();
        assert_eq!(count, 1, "{}", title);
    }

    for (name, email) in data::ROSTER {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE name = ? AND email = ?")
                .bind(name)
                .bind(email)
                .fetch_one(&repository.pool)
                .await
                .unwrap();
        assert_eq!(count, 1, "{}", email);
    }

    assert_eq!(repository.books.count().await.unwrap(), 20);
    assert_eq!(repository.members.count().await.unwrap(), 15);
}

#[tokio::test]
async fn test_seed_books_keeps_catalog_order_and_ids() {
    let repository = memory_repository().await;
    let books = seed::seed_books(&repository).await.unwrap();

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    let expected: Vec<&str> = data::CATALOG.iter().map(|(title, _, _)| *title).collect();
    assert_eq!(titles, expected);

    for book in &books {
        assert_eq!(repository.books.get_by_id(book.id).await.unwrap(), *book);
    }
}

#[tokio::test]
async fn test_borrowing_records_split_and_windows() {
    let repository = memory_repository().await;
    let mut rng = StdRng::seed_from_u64(3);
    let report = seed::run(&repository, &mut rng, today(), &mut Vec::new())
        .await
        .unwrap();

    assert_eq!(repository.borrowing.count().await.unwrap(), 15);
    assert_eq!(report.borrowing_records.iter().filter(|r| r.is_open()).count(), 5);

    let open = repository
        .borrowing
        .list(&BorrowingQuery { active: Some(true) })
        .await
        .unwrap();
    assert_eq!(open.len(), 5);

    let book_ids: HashSet<i64> = report.books.iter().map(|b| b.id).collect();
    let member_ids: HashSet<i64> = report.members.iter().map(|m| m.id).collect();

    let stored = repository
        .borrowing
        .list(&Default::default())
        .await
        .unwrap();
    assert_eq!(stored.len(), 15);

    let mut closed = 0;
    for record in &stored {
        assert!(book_ids.contains(&record.book_id));
        assert!(member_ids.contains(&record.member_id));

        let age = (today() - record.borrow_date).num_days();
        match record.return_date {
            Some(returned) => {
                closed += 1;
                assert!(record.borrow_date <= returned);
                assert!(loans::CLOSED_LOAN_LENGTH_DAYS.contains(&(returned - record.borrow_date).num_days()));
                assert!(loans::CLOSED_LOAN_AGE_DAYS.contains(&age));
            }
            None => {
                assert!(record.is_open());
                assert!(loans::OPEN_LOAN_AGE_DAYS.contains(&age));
            }
        }
    }
    assert_eq!(closed, 10);
}

#[tokio::test]
async fn test_second_run_conflicts_and_changes_nothing() {
    let repository = memory_repository().await;
    let mut rng = StdRng::seed_from_u64(4);
    seed::run(&repository, &mut rng, today(), &mut Vec::new())
        .await
        .unwrap();

    let mut out = Vec::new();
    let second = seed::run(&repository, &mut rng, today(), &mut out).await;
    assert!(matches!(second, Err(AppError::Conflict(_))), "{:?}", second.err());

    let output = String::from_utf8(out).unwrap();
    assert!(!output.contains("Seeded"));

    assert_eq!(repository.books.count().await.unwrap(), 20);
    assert_eq!(repository.members.count().await.unwrap(), 15);
    assert_eq!(repository.borrowing.count().await.unwrap(), 15);
}

#[tokio::test]
async fn test_member_conflict_rolls_back_whole_batch() {
    let repository = memory_repository().await;
    let (name, email) = data::ROSTER[7];
    repository
        .members
        .create(&library_server::models::CreateMember::new(name, email))
        .await
        .unwrap();

    let result = seed::seed_members(&repository).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repository.members.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_fixed_seed_reproduces_loans() {
    let mut plans = Vec::new();
    for _ in 0..2 {
        let repository = memory_repository().await;
        let mut rng = StdRng::seed_from_u64(2024);
        let report = seed::run(&repository, &mut rng, today(), &mut Vec::new())
            .await
            .unwrap();
        let plan: Vec<_> = report
            .borrowing_records
            .into_iter()
            .map(|r| (r.book_id, r.member_id, r.borrow_date, r.return_date))
            .collect();
        plans.push(plan);
    }
    assert_eq!(plans[0], plans[1]);
}

#[tokio::test]
async fn test_borrowing_records_need_books_and_members() {
    let repository = memory_repository().await;
    let members = seed::seed_members(&repository).await.unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let result = seed::seed_borrowing_records(&repository, &mut rng, today(), &[], &members).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(repository.borrowing.count().await.unwrap(), 0);
}
