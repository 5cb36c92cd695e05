//! Progress and history summary types.

use serde::{Deserialize, Serialize};

use super::{Goal, Task};

/// Completed versus total task count for one goal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Number of tasks marked complete
    pub completed: u64,
    /// Number of tasks in the plan
    pub total: u64,
}

impl Progress {
    /// Count progress directly from a task list.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.is_completed()).count() as u64,
            total: tasks.len() as u64,
        }
    }

    /// Completion percentage rounded to the nearest whole number; `0` for an
    /// empty plan.
    pub fn percentage(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            ((self.completed as f64 / self.total as f64) * 100.0).round() as u64
        }
    }
}

/// Aggregate statistics over a user's goal history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of goals in the history
    pub total_plans: usize,
    /// Completed tasks across every goal
    pub completed_tasks: u64,
    /// Tasks across every goal
    pub total_tasks: u64,
    /// Up to five goals, in store order
    pub recent: Vec<Goal>,
}

impl DashboardStats {
    /// How many goals appear in the recent list.
    pub const RECENT_LIMIT: usize = 5;

    /// Compute statistics from a goal history in store order.
    pub fn from_history(history: &[Goal]) -> Self {
        let (completed_tasks, total_tasks) =
            history.iter().fold((0, 0), |(completed, total), goal| {
                let progress = Progress::from_tasks(&goal.result.tasks);
                (completed + progress.completed, total + progress.total)
            });

        Self {
            total_plans: history.len(),
            completed_tasks,
            total_tasks,
            recent: history.iter().take(Self::RECENT_LIMIT).cloned().collect(),
        }
    }

    /// Overall progress across every goal.
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed_tasks,
            total: self.total_tasks,
        }
    }
}
