//! Core library for the Roadmap goal planning client.
//!
//! This crate keeps a user's AI-generated goal plans in step with a remote
//! plan store: generating plans, listing and fetching saved goals, and
//! applying objective, task and completion edits to them.
//!
//! # Layers
//!
//! - **Client** ([`client`]): one method per store request, scoped to a user
//! - **Session** ([`session`]): local goal state with optimistic completion
//!   updates and revert-on-failure
//! - **Transport** ([`transport`]): the HTTP seam, injectable for tests
//! - **Display** ([`display`]): markdown rendering of goals, plans and
//!   notices
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roadmap_core::{params::SetCompletion, GoalSession, PlanClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlanClientBuilder::new()
//!     .with_api_url("https://plans.example.com")
//!     .with_user_id("user_2abc")
//!     .build()?;
//!
//! let session = GoalSession::open(client, "65f0c2").await?;
//! let notice = session
//!     .set_completion(&SetCompletion { index: 0, completed: true })
//!     .await?;
//! println!("{notice}{}", session.snapshot());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use client::{PlanClient, PlanClientBuilder};
pub use config::Config;
pub use display::{Goals, Notice, NoticeKind, OrdinalDate, ProgressBar};
pub use error::{Failure, FailureKind, Result, SyncError, UpdateTarget};
pub use models::{DashboardStats, Goal, Plan, Progress, SortOrder, Task, TaskField};
pub use params::{DeleteGoal, DeleteTask, EditTask, GeneratePlan, SetCompletion};
pub use session::{GoalSession, PlanDraft};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
