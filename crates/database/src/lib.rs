//! # Records Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database. It encapsulates all SQL and connection handling:
//!
//! - `connect`: builds the shared connection pool (`PgPool`).
//! - `ensure_schema` / `init_with_retry`: idempotent creation of the
//!   `records` table at startup, scheduled by an explicit [`RetryPolicy`].
//! - `DbRepository`: the data access methods used by the request handlers.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::DbRepository;
pub use schema::{RetryPolicy, ensure_schema, init_with_retry};
