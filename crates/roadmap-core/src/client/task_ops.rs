//! Per-task operations for the PlanClient.

use log::warn;

use super::PlanClient;
use crate::{
    error::{Result, SyncError, UpdateTarget},
    models::{CompletionPatch, Progress, Task, TaskFieldPatch},
    params::{EditTask, SetCompletion},
    transport::{ApiRequest, Method},
};

impl PlanClient {
    /// Updates one text field of one task through the detail endpoint.
    ///
    /// The body is always `{task_index, field, value}`.
    pub async fn patch_task_field(&self, goal_id: &str, params: &EditTask) -> Result<()> {
        let body = serde_json::to_value(TaskFieldPatch {
            task_index: params.index,
            field: params.field,
            value: &params.value,
        })?;
        let request = ApiRequest::new(Method::Patch, Self::goal_segments(goal_id, Some("detail"))?)
            .scoped_to(&self.user_id)
            .with_body(body);

        self.send(request).await.map_err(|cause| {
            SyncError::update_failed(UpdateTarget::TaskField(params.field)).with_cause(cause)
        })?;
        Ok(())
    }

    /// Sets one task's completion flag.
    pub async fn patch_completion(&self, goal_id: &str, params: &SetCompletion) -> Result<()> {
        let body = serde_json::to_value(CompletionPatch {
            task_index: params.index,
            completed: params.completed,
        })?;
        let request =
            ApiRequest::new(Method::Patch, Self::goal_segments(goal_id, Some("completion"))?)
                .scoped_to(&self.user_id)
                .with_body(body);

        self.send(request).await.map_err(|cause| {
            SyncError::update_failed(UpdateTarget::Completion).with_cause(cause)
        })?;
        Ok(())
    }

    /// Fetches the store's completed/total count for a goal.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::ProgressUnavailable` if the request fails or the
    /// body lacks either count as a non-negative integer.
    pub async fn fetch_progress(&self, goal_id: &str) -> Result<Progress> {
        let request =
            ApiRequest::new(Method::Get, Self::goal_segments(goal_id, Some("progress"))?)
                .scoped_to(&self.user_id);

        let unavailable = |cause| SyncError::ProgressUnavailable {
            goal_id: goal_id.to_string(),
            cause,
        };
        let response = self.send(request).await.map_err(unavailable)?;
        response.decode().map_err(unavailable)
    }

    /// Fetches progress, falling back to a local count over `tasks` on any
    /// failure.
    pub async fn progress_or_local(&self, goal_id: &str, tasks: &[Task]) -> Progress {
        match self.fetch_progress(goal_id).await {
            Ok(progress) => progress,
            Err(e) => {
                warn!("{e}; using locally computed progress");
                Progress::from_tasks(tasks)
            }
        }
    }
}
