use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Schema initialization gave up after {0} attempts")]
    InitAttemptsExhausted(u32),
}
