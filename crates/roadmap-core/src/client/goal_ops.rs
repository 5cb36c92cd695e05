//! Goal operations for the PlanClient.

use super::PlanClient;
use crate::{
    error::{Result, SyncError, UpdateTarget},
    models::{Goal, HistoryResponse},
    params::{DeleteGoal, DeleteTask},
    transport::{ApiRequest, Method},
};

impl PlanClient {
    /// Lists every goal the user owns, in the order the store returns them.
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        let request = ApiRequest::new(Method::Get, ["api", "history"]).scoped_to(&self.user_id);

        let response = self
            .send(request)
            .await
            .map_err(|cause| SyncError::HistoryFailed { cause })?;
        let history: HistoryResponse = response
            .decode()
            .map_err(|cause| SyncError::HistoryFailed { cause })?;
        Ok(history.history)
    }

    /// Retrieves a goal by its ID.
    ///
    /// Any failure, whatever the status, is reported as
    /// `SyncError::NotFoundOrUnauthorized`.
    pub async fn fetch_goal(&self, goal_id: &str) -> Result<Goal> {
        let request = ApiRequest::new(Method::Get, Self::goal_segments(goal_id, None)?)
            .scoped_to(&self.user_id);

        let not_found = |cause| SyncError::NotFoundOrUnauthorized {
            goal_id: goal_id.to_string(),
            cause,
        };
        let response = self.send(request).await.map_err(not_found)?;
        response.decode().map_err(not_found)
    }

    /// Overwrites a goal with the full document `goal`.
    ///
    /// `target` names what the caller changed, for the error message.
    pub async fn replace_goal(&self, goal: &Goal, target: UpdateTarget) -> Result<()> {
        let body = serde_json::to_value(goal)?;
        let request = ApiRequest::new(Method::Put, Self::goal_segments(&goal.id, None)?)
            .scoped_to(&self.user_id)
            .with_body(body);

        self.send(request)
            .await
            .map_err(|cause| SyncError::update_failed(target).with_cause(cause))?;
        Ok(())
    }

    /// Permanently deletes a goal. This operation cannot be undone.
    ///
    /// # Errors
    ///
    /// * `SyncError::Validation` - `confirmed` is false (no request is sent)
    /// * `SyncError::DeleteFailed` - the store rejected the deletion
    pub async fn delete_goal(&self, params: &DeleteGoal) -> Result<()> {
        params.validate()?;
        let request = ApiRequest::new(Method::Delete, Self::goal_segments(&params.id, None)?)
            .scoped_to(&self.user_id);

        self.send(request)
            .await
            .map_err(|cause| SyncError::DeleteFailed {
                target: "goal",
                cause,
            })?;
        Ok(())
    }

    /// Removes one task by replacing the goal with a copy that lacks it.
    ///
    /// The remaining tasks keep their relative order. Returns the document
    /// that was sent.
    ///
    /// # Errors
    ///
    /// * `SyncError::Validation` - not confirmed, or the index is out of
    ///   range (no request is sent)
    /// * `SyncError::DeleteFailed` - the store rejected the replacement
    pub async fn remove_task(&self, goal: &Goal, params: &DeleteTask) -> Result<Goal> {
        params.validate()?;
        goal.result.check_index(params.index)?;

        let mut updated = goal.clone();
        updated.result.tasks.remove(params.index);

        let body = serde_json::to_value(&updated)?;
        let request = ApiRequest::new(Method::Put, Self::goal_segments(&goal.id, None)?)
            .scoped_to(&self.user_id)
            .with_body(body);

        self.send(request)
            .await
            .map_err(|cause| SyncError::DeleteFailed {
                target: "task",
                cause,
            })?;
        Ok(updated)
    }
}
