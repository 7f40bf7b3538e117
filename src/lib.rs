//! Taskboard: a task and group tracking service.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle and group management
//! - [`http`]: JSON API over the board service
//! - [`config`]: Environment-driven runtime settings

pub mod config;
pub mod http;
pub mod task;
