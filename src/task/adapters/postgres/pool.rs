//! Connection pool construction with bounded retry, and schema migrations.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// `PostgreSQL` connection pool type shared by the task and group adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Migrations under `migrations/`, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How often and how patiently to retry the initial connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, at least one.
    pub attempts: u32,
    /// Base delay; attempt `n` waits `n * backoff` before the next try.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Returns the delay to wait after the given failed attempt (1-based).
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }
}

/// Errors raised while establishing the pool.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Every connection attempt failed.
    #[error("database unavailable after {attempts} attempts: {source}")]
    Exhausted {
        /// Number of attempts made.
        attempts: u32,
        /// Error from the last attempt.
        #[source]
        source: PoolError,
    },

    /// The blocking connection task panicked or was cancelled.
    #[error("connection task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// A pending migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Migration(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds a pool and waits until a connection can be checked out, retrying
/// with linearly increasing delays.
///
/// # Errors
///
/// Returns [`ConnectError::Exhausted`] when every attempt fails.
pub async fn connect_with_retry(
    database_url: &str,
    max_size: u32,
    policy: RetryPolicy,
) -> Result<BoardPgPool, ConnectError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_timeout(Duration::from_secs(5))
        .build_unchecked(manager);

    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        let candidate = pool.clone();
        match tokio::task::spawn_blocking(move || candidate.get().map(drop)).await? {
            Ok(()) => {
                info!(attempt, "database connection established");
                return Ok(pool);
            }
            Err(source) if attempt >= attempts => {
                return Err(ConnectError::Exhausted { attempts, source });
            }
            Err(err) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "database unavailable, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Applies every pending migration from [`MIGRATIONS`] and returns how
/// many ran.
///
/// # Errors
///
/// Returns [`ConnectError`] when no connection is available or a migration
/// fails.
pub async fn run_migrations(pool: &BoardPgPool) -> Result<usize, ConnectError> {
    let handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = handle
            .get()
            .map_err(|source| ConnectError::Exhausted { attempts: 1, source })?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(ConnectError::Migration)?;
        Ok(applied.len())
    })
    .await?
}
