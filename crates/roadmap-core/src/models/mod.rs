//! Data models for goals, plans and tasks.
//!
//! These types mirror the documents stored by the remote plan store. Display
//! implementations live in [`crate::display::models`] so that the data
//! structures stay free of presentation logic.
//!
//! # Wire Shape
//!
//! A persisted [`Goal`] looks like this on the wire:
//!
//! ```json
//! {
//!   "_id": "65f0c2",
//!   "user_id": "user_2abc",
//!   "query": "Learn Python in 30 days",
//!   "timestamp": "2025-03-01T09:30:00",
//!   "result": {
//!     "objective": "Become proficient in Python",
//!     "tasks": [
//!       { "title": "Week 1", "content": "Basics", "duration": "7 days", "completed": true }
//!     ]
//!   }
//! }
//! ```
//!
//! A freshly generated [`Plan`] is the `result` object alone, and its tasks
//! carry no `completed` field.
//!
//! # Examples
//!
//! ```rust
//! use roadmap_core::models::{Plan, Task};
//!
//! let plan: Plan = serde_json::from_str(
//!     r#"{"objective":"Run a marathon","tasks":[{"title":"Base miles","content":"Easy runs"}]}"#,
//! )?;
//! assert_eq!(plan.tasks.len(), 1);
//! assert!(!plan.tasks[0].is_completed());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod goal;
pub mod plan;
pub mod requests;
pub mod summary;
pub mod task;


pub use goal::{parse_timestamp, Goal, SortOrder};
pub use plan::Plan;
pub use requests::{
    CompletionPatch, GenerateRequest, HistoryResponse, SaveDraftRequest, TaskFieldPatch,
};
pub use summary::{DashboardStats, Progress};
pub use task::{Task, TaskField};
