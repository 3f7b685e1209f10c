//! Core data types for the scheduling engine.

use serde::{Deserialize, Serialize};

/// Task identifier (u32 for compact storage and fast hashing).
///
/// Ids are caller-assigned and must be unique within one computation.
pub type TaskId = u32;

/// A task to be scheduled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Human-readable name; carried through to the output, never interpreted.
    #[serde(default)]
    pub name: String,
    /// Duration in whole time units. Zero marks a milestone.
    pub duration: u64,
    /// Ids of tasks that must finish before this task may start.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl Task {
    /// Create a task with no name and no dependencies.
    pub fn new(id: TaskId, duration: u64) -> Self {
        Self {
            id,
            name: String::new(),
            duration,
            dependencies: Vec::new(),
        }
    }

    /// Set the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the prerequisite task ids.
    pub fn with_dependencies(mut self, dependencies: Vec<TaskId>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// A task with its computed timings.
///
/// Field names follow the wire contract consumed by the reporting layers:
/// `ES`/`EF`/`LS`/`LF`, `slack`, `isCritical`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    #[serde(default)]
    pub name: String,
    pub duration: u64,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Earliest start given predecessor completion.
    #[serde(rename = "ES")]
    pub early_start: u64,
    /// Earliest finish (`early_start + duration`).
    #[serde(rename = "EF")]
    pub early_finish: u64,
    /// Latest start that does not delay the project.
    #[serde(rename = "LS")]
    pub late_start: u64,
    /// Latest finish (`late_start + duration`).
    #[serde(rename = "LF")]
    pub late_finish: u64,
    /// Scheduling float: `late_start - early_start`.
    pub slack: u64,
    /// True when slack is zero; any delay delays the project.
    #[serde(rename = "isCritical")]
    pub is_critical: bool,
}

/// A complete schedule for one project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Minimum completion time: the maximum earliest finish over all tasks.
    pub project_duration: u64,
    /// One entry per input task, sorted by ascending task id.
    pub tasks: Vec<ScheduledTask>,
}

impl Schedule {
    /// Look up a scheduled task by id.
    pub fn task(&self, id: TaskId) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Iterate over the tasks with zero slack.
    ///
    /// Multiple parallel critical chains can coexist; this is the union of
    /// their tasks, not a path sequence.
    pub fn critical_tasks(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.tasks.iter().filter(|t| t.is_critical)
    }
}
