use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single stored record. The `id` and `created_at` fields are assigned by
/// the database at insertion time; `content` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The request body for creating a record. `content` is optional at the wire
/// level so a missing field can be rejected with a proper validation error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecord {
    pub content: Option<String>,
}

/// The static payload returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
