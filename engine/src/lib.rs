//! Critical Path Method scheduling engine.
//!
//! Given tasks with durations and precedence dependencies, computes the
//! earliest/latest start and finish times for every task, the project's
//! minimum completion duration, per-task slack, and which tasks lie on the
//! critical path.
//!
//! The engine operates entirely in memory on an immutable snapshot of tasks:
//! callers supply the task list, and [`compute_schedule`] returns either a
//! complete [`Schedule`] or a [`ScheduleError`], never a partial result.
//! Independent computations share no state and may run in parallel.
//!
//! # Example
//!
//! ```
//! use critpath_engine::{compute_schedule, ScheduleConfig, Task};
//!
//! let tasks = vec![
//!     Task::new(1, 3).with_name("design"),
//!     Task::new(2, 4).with_dependencies(vec![1]),
//!     Task::new(3, 6).with_dependencies(vec![1]),
//!     Task::new(4, 7).with_dependencies(vec![2]),
//! ];
//!
//! let schedule = compute_schedule(&tasks, &ScheduleConfig::default())?;
//! assert_eq!(schedule.project_duration, 14);
//! assert!(schedule.task(2).is_some_and(|t| t.is_critical));
//! # Ok::<(), critpath_engine::ScheduleError>(())
//! ```

pub mod models;
pub mod schedule;

pub use models::{Schedule, ScheduledTask, Task, TaskId};
pub use schedule::{compute_schedule, ScheduleConfig, ScheduleError, UnknownDependencyPolicy};
