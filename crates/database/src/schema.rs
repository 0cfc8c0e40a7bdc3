use crate::error::DbError;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{error, info};

/// Decides how failed initialization attempts are rescheduled. The policy
/// owns the schedule; the attempt itself is `ensure_schema`.
///
/// The default reproduces the historical behavior: retry every 5 seconds,
/// forever, until initialization succeeds or the process is terminated.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: u32,
    max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(5))
    }
}

impl RetryPolicy {
    /// A fixed delay between attempts, with no attempt limit.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            max_delay: delay,
            multiplier: 1,
            max_attempts: None,
        }
    }

    /// A delay that doubles after every failure, capped at `max_delay`.
    pub fn exponential(initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            initial_delay,
            max_delay,
            multiplier: 2,
            max_attempts: None,
        }
    }

    /// Bounds the policy to at most `max_attempts` attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// The delay to wait after the given number of failures (zero-based).
    pub fn delay_for(&self, failures: u32) -> Duration {
        let mut delay = self.initial_delay;
        for _ in 0..failures {
            if delay >= self.max_delay {
                break;
            }
            delay = (delay * self.multiplier).min(self.max_delay);
        }
        delay.min(self.max_delay)
    }

    /// Whether the policy is out of attempts after `attempts` failures.
    pub fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// Checks whether the `records` table exists and creates it if absent.
///
/// Safe to run against an already-initialized database: an existing table is
/// left untouched. The connection used for each query is checked out of the
/// pool and returned when the query completes, regardless of outcome.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_name = 'records'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if exists {
        info!("records table already exists");
        return Ok(());
    }

    info!("creating records table");
    sqlx::query(
        r#"
        CREATE TABLE records (
            id SERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;
    info!("records table created successfully");

    Ok(())
}

/// Runs `ensure_schema` under the given retry policy.
///
/// Failures are logged and rescheduled; with an unbounded policy (the
/// default) this never returns an error, it keeps retrying until the schema
/// is in place. A bounded policy returns the last error once its attempts
/// are exhausted.
pub async fn init_with_retry(pool: &PgPool, policy: &RetryPolicy) -> Result<(), DbError> {
    let mut failures: u32 = 0;
    loop {
        match ensure_schema(pool).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                error!(error = %err, failures, "database initialization failed");
                failures += 1;
                if policy.is_exhausted(failures) {
                    return Err(DbError::InitAttemptsExhausted(failures));
                }
                let delay = policy.delay_for(failures - 1);
                info!("retrying database initialization in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_fixed_five_seconds_unbounded() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(5));
        assert_eq!(policy.delay_for(100), Duration::from_secs(5));
        assert!(!policy.is_exhausted(u32::MAX));
    }

    #[test]
    fn exponential_policy_doubles_up_to_the_cap() {
        let policy =
            RetryPolicy::exponential(Duration::from_secs(1), Duration::from_secs(30));
        assert_eq!(policy.delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
        assert_eq!(policy.delay_for(10), Duration::from_secs(30));
    }

    #[test]
    fn bounded_policy_exhausts_after_max_attempts() {
        let policy = RetryPolicy::fixed(Duration::from_millis(10)).with_max_attempts(3);
        assert!(!policy.is_exhausted(2));
        assert!(policy.is_exhausted(3));
        assert!(policy.is_exhausted(4));
    }
}
