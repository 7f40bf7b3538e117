//! `PostgreSQL` adapters for task and group persistence.

mod group_repository;
mod models;
mod pool;
mod repository;
mod schema;

pub use group_repository::PostgresGroupRepository;
pub use pool::{
    BoardPgPool, ConnectError, MIGRATIONS, RetryPolicy, connect_with_retry, run_migrations,
};
pub use repository::PostgresTaskRepository;
