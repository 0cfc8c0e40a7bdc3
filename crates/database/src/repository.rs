use crate::DbError;
use core_types::Record;
use sqlx::Row;
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for tasks that run outside the repository
    /// (schema initialization).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetches all records, most recent first.
    pub async fn list_records(&self) -> Result<Vec<Record>, DbError> {
        let rows = sqlx::query(
            "SELECT id, content, created_at FROM records ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(|row| Record {
                id: row.get("id"),
                content: row.get("content"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(records)
    }

    /// Inserts a new record with the given content. The database assigns
    /// `id` and `created_at`; the full row is returned. The content is bound
    /// as a query parameter, never interpolated into the SQL text.
    pub async fn create_record(&self, content: &str) -> Result<Record, DbError> {
        let row = sqlx::query(
            "INSERT INTO records (content) VALUES ($1) RETURNING id, content, created_at",
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(Record {
            id: row.get("id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
        })
    }
}
