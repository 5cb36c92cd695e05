//! Parameter structures for roadmap operations.
//!
//! These structures carry user intent from an interface (the CLI today) into
//! the client and session without any framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From` impls:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ PlanClient / GoalSession
//! ```
//!
//! Validation that needs no server round trip (empty goal text, missing
//! confirmation) happens on these types before any request is issued.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SyncError},
    models::TaskField,
};

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Natural-language description of the goal (required)
    pub goal: String,
    /// Whether tasks should carry duration labels
    #[serde(default)]
    pub include_timeline: bool,
}

impl GeneratePlan {
    /// The goal text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Validation` if the goal is blank.
    pub fn validate(&self) -> Result<&str> {
        let goal = self.goal.trim();
        if goal.is_empty() {
            return Err(SyncError::validation("goal").with_reason("a goal description is required"));
        }
        Ok(goal)
    }
}

/// Parameters for editing one text field of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditTask {
    /// Zero-based task position
    pub index: usize,
    /// Which field to change
    pub field: TaskField,
    /// The new value
    pub value: String,
}

/// Parameters for setting a task's completion flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SetCompletion {
    /// Zero-based task position
    pub index: usize,
    /// Desired completion state
    pub completed: bool,
}

/// Parameters for permanently deleting a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteGoal {
    /// Goal to delete
    pub id: String,
    /// Must be `true`; the actor's explicit confirmation
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for removing one task from a goal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeleteTask {
    /// Zero-based task position
    pub index: usize,
    /// Must be `true`; the actor's explicit confirmation
    #[serde(default)]
    pub confirmed: bool,
}

impl DeleteGoal {
    /// # Errors
    ///
    /// Returns `SyncError::Validation` unless the deletion was confirmed.
    pub fn validate(&self) -> Result<()> {
        require_confirmation(self.confirmed, "Goal")
    }
}

impl DeleteTask {
    /// # Errors
    ///
    /// Returns `SyncError::Validation` unless the deletion was confirmed.
    pub fn validate(&self) -> Result<()> {
        require_confirmation(self.confirmed, "Task")
    }
}

/// Reject a destructive operation that was not explicitly confirmed.
fn require_confirmation(confirmed: bool, what: &str) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(SyncError::validation("confirmed").with_reason(format!(
            "{what} deletion requires explicit confirmation. Set 'confirmed' to true to proceed."
        )))
    }
}
