//! Dependency graph construction and input validation.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::models::{Task, TaskId};

use super::error::ScheduleError;
use super::types::{ScheduleConfig, UnknownDependencyPolicy};

/// Reverse adjacency and in-degree maps for one task set.
///
/// Owned exclusively by a single computation call and discarded on return.
/// Every input task id appears exactly once as a key in both maps, including
/// tasks with no dependents and no dependencies.
#[derive(Debug)]
pub(crate) struct DependencyGraph {
    /// task id -> ids of the tasks that depend on it.
    pub children: FxHashMap<TaskId, Vec<TaskId>>,
    /// task id -> number of its dependencies present in the task set.
    pub in_degree: FxHashMap<TaskId, usize>,
}

impl DependencyGraph {
    /// Validate the task set and build the graph.
    ///
    /// Checks, in order: the configured size ceiling, duplicate task ids,
    /// and dependency references. Unknown dependency ids are rejected or
    /// skipped according to [`UnknownDependencyPolicy`]; a skipped edge does
    /// not contribute to the in-degree count.
    pub fn build(tasks: &[Task], config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        if let Some(limit) = config.max_tasks {
            if tasks.len() > limit {
                return Err(ScheduleError::TooManyTasks {
                    count: tasks.len(),
                    limit,
                });
            }
        }

        let mut known: FxHashSet<TaskId> =
            FxHashSet::with_capacity_and_hasher(tasks.len(), Default::default());
        for task in tasks {
            if !known.insert(task.id) {
                return Err(ScheduleError::DuplicateTaskId(task.id));
            }
        }

        let mut children: FxHashMap<TaskId, Vec<TaskId>> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        let mut in_degree: FxHashMap<TaskId, usize> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        for task in tasks {
            children.insert(task.id, Vec::new());
            in_degree.insert(task.id, 0);
        }

        for task in tasks {
            // A prerequisite declared twice on the same task counts once.
            let mut seen: FxHashSet<TaskId> = FxHashSet::default();
            for &dep in &task.dependencies {
                if !known.contains(&dep) {
                    match config.unknown_dependency {
                        UnknownDependencyPolicy::Reject => {
                            return Err(ScheduleError::UnknownDependency {
                                task: task.id,
                                dependency: dep,
                            });
                        }
                        UnknownDependencyPolicy::Ignore => {
                            debug!(
                                task = task.id,
                                dependency = dep,
                                "skipping dependency on unknown task"
                            );
                            continue;
                        }
                    }
                }
                if !seen.insert(dep) {
                    continue;
                }
                if let Some(dependents) = children.get_mut(&dep) {
                    dependents.push(task.id);
                }
                if let Some(degree) = in_degree.get_mut(&task.id) {
                    *degree += 1;
                }
            }
        }

        debug!(task_count = tasks.len(), "built dependency graph");

        Ok(Self {
            children,
            in_degree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, duration: u64, deps: Vec<TaskId>) -> Task {
        Task::new(id, duration).with_dependencies(deps)
    }

    #[test]
    fn test_every_task_keyed_even_when_isolated() {
        let tasks = vec![
            make_task(1, 2, vec![]),
            make_task(2, 3, vec![1]),
            make_task(9, 1, vec![]), // no dependents, no dependencies
        ];
        let graph = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap();

        assert_eq!(graph.children.len(), 3);
        assert_eq!(graph.in_degree.len(), 3);
        assert_eq!(graph.children[&1], vec![2]);
        assert!(graph.children[&9].is_empty());
        assert_eq!(graph.in_degree[&9], 0);
    }

    #[test]
    fn test_in_degree_counts_dependencies() {
        let tasks = vec![
            make_task(1, 1, vec![]),
            make_task(2, 1, vec![]),
            make_task(3, 1, vec![1, 2]),
        ];
        let graph = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap();

        assert_eq!(graph.in_degree[&1], 0);
        assert_eq!(graph.in_degree[&2], 0);
        assert_eq!(graph.in_degree[&3], 2);
        assert_eq!(graph.children[&1], vec![3]);
        assert_eq!(graph.children[&2], vec![3]);
    }

    #[test]
    fn test_repeated_dependency_counts_once() {
        let tasks = vec![make_task(1, 1, vec![]), make_task(2, 1, vec![1, 1, 1])];
        let graph = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap();

        assert_eq!(graph.in_degree[&2], 1);
        assert_eq!(graph.children[&1], vec![2]);
    }

    #[test]
    fn test_duplicate_task_id_rejected() {
        let tasks = vec![make_task(1, 1, vec![]), make_task(1, 2, vec![])];
        let err = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateTaskId(1));
    }

    #[test]
    fn test_unknown_dependency_rejected_by_default() {
        let tasks = vec![make_task(1, 1, vec![42])];
        let err = DependencyGraph::build(&tasks, &ScheduleConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnknownDependency {
                task: 1,
                dependency: 42
            }
        );
    }

    #[test]
    fn test_unknown_dependency_skipped_when_ignored() {
        let tasks = vec![make_task(1, 1, vec![42])];
        let config = ScheduleConfig {
            unknown_dependency: UnknownDependencyPolicy::Ignore,
            ..ScheduleConfig::default()
        };
        let graph = DependencyGraph::build(&tasks, &config).unwrap();

        assert_eq!(graph.in_degree[&1], 0);
        assert!(graph.children[&1].is_empty());
    }

    #[test]
    fn test_task_ceiling_enforced() {
        let tasks = vec![make_task(1, 1, vec![]), make_task(2, 1, vec![])];
        let config = ScheduleConfig {
            max_tasks: Some(1),
            ..ScheduleConfig::default()
        };
        let err = DependencyGraph::build(&tasks, &config).unwrap_err();
        assert_eq!(err, ScheduleError::TooManyTasks { count: 2, limit: 1 });
    }
}
