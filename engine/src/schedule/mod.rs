//! Critical Path Method schedule computation.
//!
//! Builds a dependency graph from an immutable task snapshot, orders it
//! topologically, and derives earliest/latest times, slack, and criticality
//! in two passes. Each invocation is a pure function with no state retained
//! across calls.

mod calculation;
mod error;
mod graph;
mod types;

pub use calculation::compute_schedule;
pub use error::ScheduleError;
pub use types::{ScheduleConfig, UnknownDependencyPolicy};
