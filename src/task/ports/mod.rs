//! Port contracts for task and group persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board service.

pub mod group_repository;
pub mod repository;

pub use group_repository::{GroupRepository, GroupRepositoryError, GroupRepositoryResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
