//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use quotes_core::{
    Author, AuthorChanges, AuthorStore, Quote, QuoteChanges, QuoteStore, QuotesError,
    AUTHOR_NAME_MAX_LEN, QUOTE_TEXT_MAX_LEN,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const QUOTE_SELECT: &str = r#"
    SELECT q.id AS id, q.text AS text, a.id AS author_id, a.name AS author_name
    FROM quotes q
    JOIN authors a ON a.id = q.author_id
"#;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        let parent = match Path::new(database_path).parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        tokio::fs::create_dir_all(&parent).await.with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps deleted ids from being handed out again
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS authors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE CHECK (length(name) <= {})
            )
            "#,
            AUTHOR_NAME_MAX_LEN
        ))
        .execute(pool)
        .await?;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
                text TEXT NOT NULL CHECK (length(text) <= {})
            )
            "#,
            QUOTE_TEXT_MAX_LEN
        ))
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_author_id ON quotes (author_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Round-trip to the database, used by the health check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl AuthorStore for Database {
    async fn list_authors(&self) -> quotes_core::Result<Vec<Author>> {
        let rows: Vec<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&*self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_author(&self, id: i64) -> quotes_core::Result<Option<Author>> {
        let row: Option<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors WHERE id = ?1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn create_author(&self, name: &str) -> quotes_core::Result<Author> {
        let row: AuthorRow =
            sqlx::query_as("INSERT INTO authors (name) VALUES (?1) RETURNING id, name")
                .bind(name)
                .fetch_one(&*self.pool)
                .await
                .map_err(|e| author_write_error(e, name))?;

        Ok(row.into())
    }

    async fn update_author(
        &self,
        id: i64,
        changes: &AuthorChanges,
    ) -> quotes_core::Result<Option<Author>> {
        let row: Option<AuthorRow> = sqlx::query_as(
            r#"
            UPDATE authors SET name = COALESCE(?1, name)
            WHERE id = ?2
            RETURNING id, name
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| author_write_error(e, changes.name.as_deref().unwrap_or_default()))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete_author(&self, id: i64) -> quotes_core::Result<Option<Author>> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row: Option<AuthorRow> = sqlx::query_as("SELECT id, name FROM authors WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Dependents first, so the author row never outlives a dangling reference
        let removed = sqlx::query("DELETE FROM quotes WHERE author_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?
            .rows_affected();

        sqlx::query("DELETE FROM authors WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        tracing::debug!("Deleted author {} and {} owned quote(s)", id, removed);

        Ok(Some(row.into()))
    }
}

#[async_trait]
impl QuoteStore for Database {
    async fn list_quotes(&self) -> quotes_core::Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> = sqlx::query_as(&format!("{QUOTE_SELECT} ORDER BY q.id"))
            .fetch_all(&*self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn list_quotes_by_author(&self, author_id: i64) -> quotes_core::Result<Vec<Quote>> {
        let rows: Vec<QuoteRow> =
            sqlx::query_as(&format!("{QUOTE_SELECT} WHERE q.author_id = ?1 ORDER BY q.id"))
                .bind(author_id)
                .fetch_all(&*self.pool)
                .await
                .map_err(database_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_quote(&self, id: i64) -> quotes_core::Result<Option<Quote>> {
        let row: Option<QuoteRow> = sqlx::query_as(&format!("{QUOTE_SELECT} WHERE q.id = ?1"))
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn create_quote(&self, author_id: i64, text: &str) -> quotes_core::Result<Quote> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO quotes (author_id, text) VALUES (?1, ?2) RETURNING id",
        )
        .bind(author_id)
        .bind(text)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::ForeignKey) => QuotesError::AuthorNotFound(author_id),
            Some(Violation::Check) => text_too_long(),
            _ => database_error(e),
        })?;

        let row: QuoteRow = sqlx::query_as(&format!("{QUOTE_SELECT} WHERE q.id = ?1"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(row.into())
    }

    async fn update_quote(
        &self,
        id: i64,
        changes: &QuoteChanges,
    ) -> quotes_core::Result<Option<Quote>> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let updated = sqlx::query("UPDATE quotes SET text = COALESCE(?1, text) WHERE id = ?2")
            .bind(changes.text.as_deref())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Check) => text_too_long(),
                _ => database_error(e),
            })?
            .rows_affected();

        if updated == 0 {
            return Ok(None);
        }

        let row: QuoteRow = sqlx::query_as(&format!("{QUOTE_SELECT} WHERE q.id = ?1"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(Some(row.into()))
    }

    async fn delete_quote(&self, id: i64) -> quotes_core::Result<Option<Quote>> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row: Option<QuoteRow> = sqlx::query_as(&format!("{QUOTE_SELECT} WHERE q.id = ?1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM quotes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(Some(row.into()))
    }
}

/// Constraint classes the store reports back as caller errors
enum Violation {
    Unique,
    Check,
    ForeignKey,
}

fn violation(e: &sqlx::Error) -> Option<Violation> {
    let db_err = e.as_database_error()?;
    if db_err.is_unique_violation() {
        Some(Violation::Unique)
    } else if db_err.is_check_violation() {
        Some(Violation::Check)
    } else if db_err.is_foreign_key_violation() {
        Some(Violation::ForeignKey)
    } else {
        None
    }
}

fn database_error(e: sqlx::Error) -> QuotesError {
    tracing::error!("SQLite error: {}", e);
    QuotesError::Database(e.to_string())
}

fn author_write_error(e: sqlx::Error, name: &str) -> QuotesError {
    match violation(&e) {
        Some(Violation::Unique) => {
            QuotesError::Conflict(format!("Author with name '{}' already exists.", name))
        }
        Some(Violation::Check) => QuotesError::Conflict(format!(
            "Author name must be at most {} characters.",
            AUTHOR_NAME_MAX_LEN
        )),
        _ => database_error(e),
    }
}

fn text_too_long() -> QuotesError {
    QuotesError::Conflict(format!(
        "Quote text must be at most {} characters.",
        QUOTE_TEXT_MAX_LEN
    ))
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author {
            id: r.id,
            name: r.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    text: String,
    author_id: i64,
    author_name: String,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        Quote {
            id: r.id,
            author: Author {
                id: r.author_id,
                name: r.author_name,
            },
            text: r.text,
        }
    }
}
