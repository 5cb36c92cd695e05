//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Task;

/// An objective plus the ordered list of tasks that reach it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// What the plan is meant to achieve
    pub objective: String,

    /// Tasks in the order they should be carried out
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Plan {
    /// Number of tasks whose completion flag is set.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Checks that `index` addresses an existing task.
    pub fn check_index(&self, index: usize) -> crate::Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(crate::SyncError::validation("task_index").with_reason(format!(
                "index {index} is out of range for a plan with {} task(s)",
                self.tasks.len()
            )))
        }
    }
}
