//! Local goal state kept in step with the plan store.
//!
//! A [`GoalSession`] owns the copy of one goal a front end is showing and
//! applies the store's update rules to it:
//!
//! - Objective, whole-task and task-field edits update local state only after
//!   the store accepts them.
//! - Completion changes are optimistic. The flag flips locally before the
//!   request resolves and is put back if the request fails, unless a later
//!   change has already moved it again.
//! - Operations may run concurrently on the same session. The state lock is
//!   never held across a request, so each response is applied to whatever the
//!   state is when it arrives.
//! - Task indexes are only trusted while the task list keeps its shape. A
//!   task delete starts a new epoch; a response to an index-based request
//!   issued in an earlier epoch is not applied by index, the goal is reloaded
//!   from the store instead.
//!
//! [`PlanDraft`] covers the other flow: a generated plan that has not been
//! saved as a goal yet.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::{
    client::PlanClient,
    display::Notice,
    error::{Result, UpdateTarget},
    models::{Goal, Progress, Task},
    params::{DeleteGoal, DeleteTask, EditTask, SetCompletion},
};

pub mod draft;

#[cfg(test)]
mod tests;

pub use draft::PlanDraft;

#[derive(Debug)]
struct SessionState {
    goal: Goal,
    progress: Progress,
    /// Bumped whenever task positions may have shifted
    epoch: u64,
}

/// One goal being viewed and edited.
#[derive(Debug)]
pub struct GoalSession {
    client: PlanClient,
    goal_id: String,
    state: Mutex<SessionState>,
}

impl GoalSession {
    /// Wrap an already fetched goal. Progress starts as a local count.
    pub fn new(client: PlanClient, goal: Goal) -> Self {
        let progress = Progress::from_tasks(&goal.result.tasks);
        Self {
            client,
            goal_id: goal.id.clone(),
            state: Mutex::new(SessionState {
                goal,
                progress,
                epoch: 0,
            }),
        }
    }

    /// Fetch a goal and its progress.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotFoundOrUnauthorized` if the goal cannot be
    /// fetched. A progress failure falls back to a local count.
    pub async fn open(client: PlanClient, goal_id: &str) -> Result<Self> {
        let goal = client.fetch_goal(goal_id).await?;
        let session = Self::new(client, goal);
        session.refresh_progress().await;
        Ok(session)
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn goal_id(&self) -> &str {
        &self.goal_id
    }

    /// Copy of the current local goal.
    pub fn snapshot(&self) -> Goal {
        self.state().goal.clone()
    }

    /// Last known progress.
    pub fn progress(&self) -> Progress {
        self.state().progress
    }

    /// Progress counted over the local task list.
    pub fn local_progress(&self) -> Progress {
        Progress::from_tasks(&self.state().goal.result.tasks)
    }

    /// Replace the objective through a full document replace.
    pub async fn set_objective(&self, objective: &str) -> Result<Notice> {
        let mut document = self.snapshot();
        document.result.objective = objective.to_string();

        self.client
            .replace_goal(&document, UpdateTarget::Objective)
            .await?;

        self.state().goal.result.objective = document.result.objective;
        Ok(Notice::success("Goal objective updated successfully"))
    }

    /// Replace one whole task through a full document replace.
    pub async fn save_task(&self, index: usize, task: Task) -> Result<Notice> {
        let (mut document, epoch) = self.snapshot_with_epoch();
        document.result.check_index(index)?;
        document.result.tasks[index] = task.clone();

        self.client.replace_goal(&document, UpdateTarget::Task).await?;

        self.apply_at(epoch, index, |slot| *slot = task).await;
        Ok(Notice::success("Task updated successfully"))
    }

    /// Change one text field of one task through the detail patch.
    pub async fn edit_task_field(&self, params: &EditTask) -> Result<Notice> {
        let epoch = {
            let state = self.state();
            state.goal.result.check_index(params.index)?;
            state.epoch
        };

        self.client
            .patch_task_field(&self.goal_id, params)
            .await?;

        self.apply_at(epoch, params.index, |task| {
            task.set_field(params.field, params.value.as_str());
        })
        .await;
        Ok(Notice::success(format!(
            "Task {} updated successfully",
            params.field
        )))
    }

    /// Set a task's completion flag optimistically.
    ///
    /// On failure the previous flag is restored if the task still shows the
    /// value this call set, and the error is returned. If a task delete
    /// landed in the meantime the goal is reloaded instead of reverted. On
    /// success progress is refreshed.
    pub async fn set_completion(&self, params: &SetCompletion) -> Result<Notice> {
        let (previous, epoch) = {
            let mut state = self.state();
            state.goal.result.check_index(params.index)?;
            let epoch = state.epoch;
            let task = &mut state.goal.result.tasks[params.index];
            (
                std::mem::replace(&mut task.completed, Some(params.completed)),
                epoch,
            )
        };

        if let Err(e) = self.client.patch_completion(&self.goal_id, params).await {
            warn!("{e}; undoing optimistic completion of task {}", params.index);
            self.apply_at(epoch, params.index, |task| {
                if task.completed == Some(params.completed) {
                    task.completed = previous;
                } else {
                    debug!("task {} changed since the failed update; keeping it", params.index);
                }
            })
            .await;
            return Err(e);
        }

        self.refresh_progress().await;
        Ok(Notice::success(if params.completed {
            "Task marked as completed"
        } else {
            "Task marked as incomplete"
        }))
    }

    /// Flip a task's completion flag.
    pub async fn toggle_completion(&self, index: usize) -> Result<Notice> {
        let completed = {
            let state = self.state();
            state.goal.result.check_index(index)?;
            !state.goal.result.tasks[index].is_completed()
        };
        self.set_completion(&SetCompletion { index, completed }).await
    }

    /// Remove one task. The remaining tasks keep their order.
    pub async fn delete_task(&self, params: &DeleteTask) -> Result<Notice> {
        let (document, epoch) = self.snapshot_with_epoch();
        self.client.remove_task(&document, params).await?;

        let stale = {
            let mut state = self.state();
            let stale = state.epoch != epoch;
            if !stale && params.index < state.goal.result.tasks.len() {
                state.goal.result.tasks.remove(params.index);
                state.progress = Progress::from_tasks(&state.goal.result.tasks);
            }
            state.epoch += 1;
            stale
        };
        if stale {
            self.reload().await;
        }
        Ok(Notice::success("Task deleted successfully"))
    }

    fn snapshot_with_epoch(&self) -> (Goal, u64) {
        let state = self.state();
        (state.goal.clone(), state.epoch)
    }

    /// Apply `update` to the task at `index` if no delete has shifted the
    /// task list since `epoch`; otherwise reload the goal.
    async fn apply_at(&self, epoch: u64, index: usize, update: impl FnOnce(&mut Task)) {
        {
            let mut state = self.state();
            if state.epoch == epoch {
                if let Some(task) = state.goal.result.tasks.get_mut(index) {
                    update(task);
                }
                return;
            }
        }
        debug!("task list changed while updating task {index}; reloading");
        self.reload().await;
    }

    /// Replace local state with the stored goal.
    async fn reload(&self) {
        match self.client.fetch_goal(&self.goal_id).await {
            Ok(goal) => {
                let mut state = self.state();
                state.progress = Progress::from_tasks(&goal.result.tasks);
                state.goal = goal;
                state.epoch += 1;
            }
            Err(e) => warn!("{e}; keeping local goal"),
        }
    }

    /// Reload progress from the store, falling back to a local count.
    pub async fn refresh_progress(&self) -> Progress {
        let tasks = self.snapshot().result.tasks;
        let progress = self.client.progress_or_local(&self.goal_id, &tasks).await;
        self.state().progress = progress;
        progress
    }

    /// Permanently delete the goal.
    pub async fn delete_goal(&self, confirmed: bool) -> Result<Notice> {
        self.client
            .delete_goal(&DeleteGoal {
                id: self.goal_id.clone(),
                confirmed,
            })
            .await?;
        Ok(Notice::success("Goal deleted successfully"))
    }
}
