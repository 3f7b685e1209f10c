//! Error types for schedule computation.

use thiserror::Error;

use crate::models::TaskId;

/// Errors that can occur while computing a schedule.
///
/// All variants reflect invalid caller input; none are recoverable by the
/// engine and no partial schedule is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Cycle detected in task dependencies")]
    CircularDependency,
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(TaskId),
    #[error("Task {task} depends on unknown task {dependency}")]
    UnknownDependency { task: TaskId, dependency: TaskId },
    #[error("Task set has {count} tasks, exceeding the limit of {limit}")]
    TooManyTasks { count: usize, limit: usize },
}
