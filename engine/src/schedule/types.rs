//! Configuration and timing types for schedule computation.

/// Policy for dependencies that reference ids absent from the task set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownDependencyPolicy {
    /// Reject the input with an `UnknownDependency` error.
    #[default]
    Reject,
    /// Treat the dependency as if it had not been declared.
    Ignore,
}

/// Configuration for schedule computation.
#[derive(Clone, Debug, Default)]
pub struct ScheduleConfig {
    /// How to treat dependencies on ids missing from the task set.
    pub unknown_dependency: UnknownDependencyPolicy,
    /// Upper bound on accepted task-set size. `None` disables the check.
    pub max_tasks: Option<usize>,
}

/// Per-task timing computed by the forward and backward passes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub early_start: u64,
    /// Earliest possible finish time (from forward pass).
    pub early_finish: u64,
    /// Latest allowable start time (from backward pass).
    pub late_start: u64,
    /// Latest allowable finish time (from backward pass).
    pub late_finish: u64,
}

impl TaskTiming {
    /// Slack is exact with integer durations; no epsilon needed.
    pub fn slack(&self) -> u64 {
        self.late_start - self.early_start
    }

    pub fn is_critical(&self) -> bool {
        self.slack() == 0
    }
}
