//! Repository layer for database operations

pub mod batch;
pub mod books;
pub mod borrowing;
pub mod members;

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::{config::DatabaseConfig, error::AppResult};

pub use batch::Batch;

/// Storage for records inserted through a [`Batch`].
///
/// `insert_batch` writes every staged value inside one transaction and commits
/// once, returning generated ids in staging order. `fetch` re-reads a single
/// record so callers get rows exactly as the database stored them.
#[async_trait]
pub trait BatchStore<T: Sync>: Sync {
    type Record: Send;

    async fn insert_batch(&self, staged: &[T]) -> AppResult<Vec<i64>>;

    async fn fetch(&self, id: i64) -> AppResult<Self::Record>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub borrowing: borrowing::BorrowingRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            borrowing: borrowing::BorrowingRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Open a connection pool to the configured SQLite database
pub async fn connect(config: &DatabaseConfig) -> AppResult<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        // Each connection to an in-memory database sees its own empty store
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    Ok(pool)
}

/// Create the schema if it does not exist yet
pub async fn create_schema(pool: &Pool<Sqlite>) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Connect and create the schema in one step
pub async fn open(config: &DatabaseConfig) -> AppResult<Repository> {
    let pool = connect(config).await?;
    create_schema(&pool).await?;
    tracing::debug!("Schema ready at {}", config.url);
    Ok(Repository::new(pool))
}
