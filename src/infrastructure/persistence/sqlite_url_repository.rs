//! SQLite implementation of the URL record repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::NewUrlRecord;
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::utils::db_error::classify_insert_error;

/// `AUTOINCREMENT` keeps ids monotonic across deletions.
const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL)
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// Opens a pool on the SQLite database at `storage_path`.
///
/// The file is created if missing. `:memory:` opens a private in-memory
/// database; the pool is then pinned to a single long-lived connection, since
/// every in-memory connection sees its own database and dropping it loses
/// the data.
///
/// # Errors
///
/// Returns an error if the path cannot be parsed or the database cannot be
/// opened.
pub async fn connect_pool(
    storage_path: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = storage_path == ":memory:";

    let options = if in_memory {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
    }
    .busy_timeout(Duration::from_secs(5));

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

/// SQLite repository for URL records.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`;
/// the repository never pre-checks existence before inserting.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_INDEX).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn insert(&self, record: NewUrlRecord) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(&record.target_url)
            .bind(&record.alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(classify_insert_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_url(&self, alias: &str) -> Result<String, StoreError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        url.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
