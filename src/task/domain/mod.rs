//! Domain model for tasks and groups.
//!
//! The domain owns validated scalars, the task status state machine, and the
//! deletion rule for in-progress tasks. Store concerns such as identifier
//! assignment and referential integrity live outside this boundary.

mod error;
mod group;
mod ids;
mod name;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use group::Group;
pub use ids::{GroupId, TaskId};
pub use name::{GroupName, TaskName};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskEdit};
