//! Plan sync client for the remote goal-plan store.
//!
//! [`PlanClient`] performs every request the application makes against the
//! store, on behalf of one user. It holds no goal state of its own; the
//! optimistic local copy lives in [`crate::session::GoalSession`].
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  GoalSession /  │    │   PlanClient    │    │    Transport    │
//! │   PlanDraft     │───▶│ (plan_ops,      │───▶│ (HttpTransport  │
//! │                 │    │  goal_ops, ...) │    │  or test double)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Local state           Request contract         Wire
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanClient`] instances from configuration
//! - [`plan_ops`]: Plan generation and draft saving
//! - [`goal_ops`]: Goal history, fetch, replace and delete
//! - [`task_ops`]: Per-task field and completion patches, progress
//!
//! ## Request Rules
//!
//! Every operation issues at most one request and never retries. Local
//! validation failures issue no request at all. Failures come back as a
//! [`crate::SyncError`] whose message is fit to show to the user.
//!
//! # Usage
//!
//! ```rust,no_run
//! use roadmap_core::{params::GeneratePlan, PlanClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlanClientBuilder::new()
//!     .with_api_url("https://plans.example.com")
//!     .with_user_id("user_2abc")
//!     .build()?;
//!
//! let plan = client
//!     .generate_plan(&GeneratePlan {
//!         goal: "Learn Python in 30 days".to_string(),
//!         include_timeline: true,
//!     })
//!     .await?;
//! println!("{plan}");
//!
//! for goal in client.list_goals().await? {
//!     println!("{}: {}", goal.id, goal.query);
//! }
//! # Ok(())
//! # }
//! ```

use std::{fmt, sync::Arc};

use log::debug;

use crate::{
    error::{Failure, Result, SyncError},
    transport::{ApiRequest, ApiResponse, Transport},
};

pub mod builder;
pub mod goal_ops;
pub mod plan_ops;
pub mod task_ops;


pub use builder::PlanClientBuilder;

/// Client for the plan store, scoped to one user.
#[derive(Clone)]
pub struct PlanClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) user_id: String,
}

impl PlanClient {
    /// Creates a client over an existing transport.
    pub(crate) fn new(transport: Arc<dyn Transport>, user_id: String) -> Self {
        Self { transport, user_id }
    }

    /// The user every request is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Issue a request and require a 2xx status.
    pub(crate) async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, Failure> {
        debug!("sending {request}");
        self.transport.send(request).await?.ensure_success()
    }

    /// Path segments for a goal resource, rejecting blank ids.
    pub(crate) fn goal_segments(goal_id: &str, suffix: Option<&str>) -> Result<Vec<String>> {
        let goal_id = goal_id.trim();
        if goal_id.is_empty() {
            return Err(SyncError::validation("goal_id").with_reason("a goal id is required"));
        }

        let mut segments = vec!["api".to_string(), "task".to_string(), goal_id.to_string()];
        segments.extend(suffix.map(str::to_string));
        Ok(segments)
    }
}

impl fmt::Debug for PlanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanClient")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
