//! Shared test helpers for `PostgreSQL` repository integration tests.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
pub use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::fixture;
use std::io;
use taskboard::task::{
    adapters::postgres::{BoardPgPool, MIGRATIONS, PostgresGroupRepository, PostgresTaskRepository},
    domain::{GroupId, GroupName, NewTask, TaskName},
};
use tokio::runtime::Runtime;

/// Boxed error type for harness setup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Template database name for the migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Ensures the template database exists with every migration applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Drops the test database when the owning test finishes, even on panic.
pub struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl CleanupGuard {
    const fn new(cluster: &'static TestCluster, db_name: String) -> Self {
        Self { cluster, db_name }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Task and group repositories sharing one pool on a private database.
///
/// Fields drop in declaration order, so the pool closes before the guard
/// drops the database.
pub struct PostgresBoard {
    /// Task repository under test.
    pub tasks: PostgresTaskRepository,
    /// Group repository under test.
    pub groups: PostgresGroupRepository,
    _guard: CleanupGuard,
}

/// Creates a fresh database from the template and wires both repositories
/// to it.
///
/// # Errors
///
/// Returns an error if the template, database, or pool cannot be set up.
#[fixture]
pub fn postgres_board(
    shared_test_cluster: &'static TestCluster,
) -> Result<PostgresBoard, BoxError> {
    ensure_template(shared_test_cluster)?;
    let db_name = format!("taskboard_{}", uuid::Uuid::new_v4().simple());
    shared_test_cluster
        .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
        .map_err(|e| Box::new(e) as BoxError)?;
    let guard = CleanupGuard::new(shared_test_cluster, db_name.clone());

    let url = shared_test_cluster.connection().database_url(&db_name);
    let pool: BoardPgPool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(url))
        .map_err(|e| Box::new(e) as BoxError)?;

    Ok(PostgresBoard {
        tasks: PostgresTaskRepository::new(pool.clone()),
        groups: PostgresGroupRepository::new(pool),
        _guard: guard,
    })
}

/// Builds an unsaved task.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn new_task(name: &str, group_id: Option<GroupId>) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(TaskName::new(name)?, "", group_id, &DefaultClock))
}

/// Builds a validated group name.
///
/// # Errors
///
/// Returns an error if the name is blank.
pub fn group_name(name: &str) -> Result<GroupName, eyre::Report> {
    Ok(GroupName::new(name)?)
}
