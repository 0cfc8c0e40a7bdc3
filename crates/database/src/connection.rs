use crate::error::DbError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

/// Builds a connection pool for the given postgres URL.
///
/// The pool is created lazily: connections are established on first use, so
/// the server can come up and start answering requests before the database
/// is reachable. Each query checks a connection out of the pool and returns
/// it when done, on success and error paths alike.
pub fn connect(database_url: &str) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)?;

    Ok(pool)
}
