//! Schedule computation using forward and backward passes.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::debug;

use crate::models::{Schedule, ScheduledTask, Task, TaskId};

use super::error::ScheduleError;
use super::graph::DependencyGraph;
use super::types::{ScheduleConfig, TaskTiming};

/// Compute earliest/latest times, slack, and criticality for every task.
///
/// A pure function of the input task set: validates, builds the dependency
/// graph, orders it topologically, runs the forward and backward passes, and
/// assembles the result sorted by ascending task id. Invalid input yields an
/// error and no partial schedule.
///
/// # Errors
///
/// * `CircularDependency` if the dependency graph has a cycle
/// * `DuplicateTaskId`, `UnknownDependency`, `TooManyTasks` for input that
///   fails validation before graph traversal
pub fn compute_schedule(
    tasks: &[Task],
    config: &ScheduleConfig,
) -> Result<Schedule, ScheduleError> {
    let graph = DependencyGraph::build(tasks, config)?;
    let topo_order = topological_order(tasks, &graph)?;

    let task_map: FxHashMap<TaskId, &Task> = tasks.iter().map(|t| (t.id, t)).collect();

    let mut timings = forward_pass(tasks, &topo_order, &task_map, &graph);

    let project_duration = timings
        .values()
        .map(|t| t.early_finish)
        .max()
        .unwrap_or(0);

    backward_pass(&topo_order, &task_map, &graph, project_duration, &mut timings);

    let mut scheduled: Vec<ScheduledTask> = Vec::with_capacity(tasks.len());
    for task in tasks {
        let Some(timing) = timings.get(&task.id) else {
            continue;
        };
        scheduled.push(ScheduledTask {
            id: task.id,
            name: task.name.clone(),
            duration: task.duration,
            dependencies: task.dependencies.clone(),
            early_start: timing.early_start,
            early_finish: timing.early_finish,
            late_start: timing.late_start,
            late_finish: timing.late_finish,
            slack: timing.slack(),
            is_critical: timing.is_critical(),
        });
    }
    scheduled.sort_by_key(|t| t.id);

    debug!(
        task_count = scheduled.len(),
        project_duration, "schedule computed"
    );

    Ok(Schedule {
        project_duration,
        tasks: scheduled,
    })
}

/// Order tasks so every task appears after all its prerequisites.
///
/// Kahn's algorithm with a FIFO queue seeded in input order, so tie-breaks
/// among simultaneously-ready tasks follow insertion/discovery order. The
/// tie-break affects only processing order, never computed times.
fn topological_order(
    tasks: &[Task],
    graph: &DependencyGraph,
) -> Result<Vec<TaskId>, ScheduleError> {
    let mut in_degree = graph.in_degree.clone();

    let mut queue: VecDeque<TaskId> = tasks
        .iter()
        .filter(|t| in_degree.get(&t.id) == Some(&0))
        .map(|t| t.id)
        .collect();

    let mut order: Vec<TaskId> = Vec::with_capacity(tasks.len());

    while let Some(task_id) = queue.pop_front() {
        order.push(task_id);

        if let Some(children) = graph.children.get(&task_id) {
            for &child_id in children {
                if let Some(degree) = in_degree.get_mut(&child_id) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(child_id);
                    }
                }
            }
        }
    }

    if order.len() != tasks.len() {
        return Err(ScheduleError::CircularDependency);
    }

    Ok(order)
}

/// Forward pass: compute earliest start/finish times in topological order.
///
/// Each task starts at ES = 0, EF = duration; children are relaxed against
/// their parents' finish times. Topological order guarantees a task's ES is
/// final before any of its children read its EF.
fn forward_pass(
    tasks: &[Task],
    topo_order: &[TaskId],
    task_map: &FxHashMap<TaskId, &Task>,
    graph: &DependencyGraph,
) -> FxHashMap<TaskId, TaskTiming> {
    let mut timings: FxHashMap<TaskId, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
    for task in tasks {
        timings.insert(
            task.id,
            TaskTiming {
                early_start: 0,
                early_finish: task.duration,
                late_start: 0,
                late_finish: 0,
            },
        );
    }

    for &task_id in topo_order {
        let finish = match timings.get(&task_id) {
            Some(t) => t.early_finish,
            None => continue,
        };

        let Some(children) = graph.children.get(&task_id) else {
            continue;
        };
        for &child_id in children {
            let duration = match task_map.get(&child_id) {
                Some(t) => t.duration,
                None => continue,
            };
            if let Some(child) = timings.get_mut(&child_id) {
                if finish > child.early_start {
                    child.early_start = finish;
                    child.early_finish = finish + duration;
                }
            }
        }
    }

    timings
}

/// Backward pass: compute latest start/finish times in reverse topological
/// order.
///
/// Tasks with no dependents finish no later than the project end; every
/// other task must finish in time for its earliest-deadline successor
/// (LF = min over children of child LS). Reverse order guarantees children
/// are finalized before their parents read them, symmetric to the forward
/// pass.
fn backward_pass(
    topo_order: &[TaskId],
    task_map: &FxHashMap<TaskId, &Task>,
    graph: &DependencyGraph,
    project_duration: u64,
    timings: &mut FxHashMap<TaskId, TaskTiming>,
) {
    for &task_id in topo_order.iter().rev() {
        let mut late_finish = u64::MAX;

        if let Some(children) = graph.children.get(&task_id) {
            for child_id in children {
                if let Some(child) = timings.get(child_id) {
                    late_finish = late_finish.min(child.late_start);
                }
            }
        }

        if late_finish == u64::MAX {
            late_finish = project_duration;
        }

        let duration = task_map.get(&task_id).map(|t| t.duration).unwrap_or(0);

        if let Some(timing) = timings.get_mut(&task_id) {
            timing.late_finish = late_finish;
            timing.late_start = late_finish - duration;
        }
    }
}
