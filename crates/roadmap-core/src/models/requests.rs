//! Request and response bodies exchanged with the plan store.

use serde::{Deserialize, Serialize};

use super::{Goal, Plan, TaskField};

/// Body of `POST /api/plan`.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub goal: &'a str,
    pub include_timeline: bool,
    pub user_id: &'a str,
}

/// Body of `PUT /api/update-plan`.
#[derive(Debug, Serialize)]
pub struct SaveDraftRequest<'a> {
    pub goal: &'a str,
    pub plan: &'a Plan,
    pub user_id: &'a str,
}

/// Body of `PATCH /api/task/{id}/detail`.
///
/// This is the only shape sent for field edits; no alias keys are added.
#[derive(Debug, Serialize)]
pub struct TaskFieldPatch<'a> {
    pub task_index: usize,
    pub field: TaskField,
    pub value: &'a str,
}

/// Body of `PATCH /api/task/{id}/completion`.
#[derive(Debug, Serialize)]
pub struct CompletionPatch {
    pub task_index: usize,
    pub completed: bool,
}

/// Response of `GET /api/history`.
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<Goal>,
}
