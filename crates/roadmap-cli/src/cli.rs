//! Command argument definitions using clap.
//!
//! Each command has a clap `Args` struct here and converts into the matching
//! core parameter type with `From`, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanClient / GoalSession
//! ```

use clap::{Args, Subcommand};
use roadmap_core::{
    params::{DeleteGoal, DeleteTask, EditTask, GeneratePlan},
    SortOrder, TaskField,
};

/// Generate a plan for a goal
#[derive(Args)]
pub struct GenerateArgs {
    /// What you want to achieve, in your own words
    pub goal: String,
    /// Give each task a duration label
    #[arg(long)]
    pub timeline: bool,
    /// Save the generated plan as a goal
    #[arg(long)]
    pub save: bool,
}

impl From<&GenerateArgs> for GeneratePlan {
    fn from(val: &GenerateArgs) -> Self {
        GeneratePlan {
            goal: val.goal.clone(),
            include_timeline: val.timeline,
        }
    }
}

/// List saved goals
#[derive(Args)]
pub struct ListGoalsArgs {
    /// Order by creation time: newest or oldest
    #[arg(long, default_value = "newest")]
    pub sort: SortOrder,
}

/// Refer to one saved goal
#[derive(Args)]
pub struct GoalIdArgs {
    /// Goal id
    pub id: String,
}

/// Replace a goal's objective
#[derive(Args)]
pub struct SetObjectiveArgs {
    /// Goal id
    pub id: String,
    /// The new objective
    pub objective: String,
}

/// Delete a goal permanently
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// Goal id
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteGoalArgs> for DeleteGoal {
    fn from(val: DeleteGoalArgs) -> Self {
        DeleteGoal {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Commands operating on saved goals
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List saved goals
    #[command(aliases = ["l", "ls"])]
    List(ListGoalsArgs),
    /// Show a goal with its plan
    #[command(alias = "s")]
    Show(GoalIdArgs),
    /// Replace a goal's objective
    Objective(SetObjectiveArgs),
    /// Show completion progress
    #[command(alias = "p")]
    Progress(GoalIdArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGoalArgs),
    /// Summary statistics over every saved goal
    Stats,
}

/// Edit one text field of a task
#[derive(Args)]
pub struct EditTaskArgs {
    /// Goal id
    pub goal: String,
    /// Zero-based task index
    pub index: usize,
    /// Field to change: title, content or duration
    pub field: TaskField,
    /// The new value
    pub value: String,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            index: val.index,
            field: val.field,
            value: val.value,
        }
    }
}

/// Refer to one task of a saved goal
#[derive(Args)]
pub struct TaskRefArgs {
    /// Goal id
    pub goal: String,
    /// Zero-based task index
    pub index: usize,
}

/// Remove a task from a goal
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// Goal id
    pub goal: String,
    /// Zero-based task index
    pub index: usize,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<&DeleteTaskArgs> for DeleteTask {
    fn from(val: &DeleteTaskArgs) -> Self {
        DeleteTask {
            index: val.index,
            confirmed: val.confirm,
        }
    }
}

/// Commands operating on the tasks of a saved goal
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Edit one text field of a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Mark a task as completed
    #[command(alias = "c")]
    Complete(TaskRefArgs),
    /// Mark a task as not completed
    Reopen(TaskRefArgs),
    /// Flip a task's completion state
    Toggle(TaskRefArgs),
    /// Remove a task from a goal
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
}
