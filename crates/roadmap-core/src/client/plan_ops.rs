//! Plan generation and draft saving for the PlanClient.

use log::debug;
use serde_json::Value;

use super::PlanClient;
use crate::{
    error::{Failure, Result, SyncError, UpdateTarget},
    models::{GenerateRequest, Plan, SaveDraftRequest},
    params::GeneratePlan,
    transport::{ApiRequest, Method},
};

impl PlanClient {
    /// Ask the generation service for a plan.
    ///
    /// Transport failures and an `error` field inside a 2xx envelope both
    /// surface as `SyncError::Generation`, whose message is the server's
    /// error text when there is one and a generic message otherwise.
    ///
    /// # Errors
    ///
    /// * `SyncError::Validation` - the goal text is blank (no request is sent)
    /// * `SyncError::Generation` - the request or the service failed
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        let goal = params.validate()?;
        let body = serde_json::to_value(GenerateRequest {
            goal,
            include_timeline: params.include_timeline,
            user_id: &self.user_id,
        })?;

        let request = ApiRequest::new(Method::Post, ["api", "plan"]).with_body(body);
        let response = self.send(request).await.map_err(SyncError::generation)?;
        let envelope: Value = response.decode().map_err(SyncError::generation)?;

        if let Some(message) = reported_error(&envelope) {
            debug!("generation service reported: {message}");
            return Err(SyncError::generation(Failure::Reported { message }));
        }

        serde_json::from_value(envelope)
            .map_err(|source| SyncError::generation(Failure::Malformed { source }))
    }

    /// Persist a generated plan together with the goal text it answers.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::UpdateFailed` if the store rejects the plan.
    pub async fn save_draft(&self, goal: &str, plan: &Plan) -> Result<()> {
        let body = serde_json::to_value(SaveDraftRequest {
            goal,
            plan,
            user_id: &self.user_id,
        })?;

        let request = ApiRequest::new(Method::Put, ["api", "update-plan"]).with_body(body);
        self.send(request)
            .await
            .map_err(|cause| SyncError::update_failed(UpdateTarget::Draft).with_cause(cause))?;
        Ok(())
    }
}

/// The error text embedded in a generation envelope, if it carries one.
///
/// `null`, `false` and the empty string mean "no error".
fn reported_error(envelope: &Value) -> Option<String> {
    match envelope.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
