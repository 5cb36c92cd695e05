//! A generated plan that has not been saved as a goal yet.

use crate::{
    client::PlanClient,
    display::Notice,
    error::Result,
    models::Plan,
    params::{EditTask, GeneratePlan},
};

/// Freshly generated plan plus the goal text it answers.
///
/// Every edit is saved through the draft endpoint together with the goal
/// text, and kept locally only once the store accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    goal: String,
    plan: Plan,
}

impl PlanDraft {
    pub fn new(goal: impl Into<String>, plan: Plan) -> Self {
        Self {
            goal: goal.into(),
            plan,
        }
    }

    /// Generate a plan for `params.goal`.
    pub async fn generate(client: &PlanClient, params: &GeneratePlan) -> Result<Self> {
        let goal = params.validate()?.to_string();
        let plan = client.generate_plan(params).await?;
        Ok(Self { goal, plan })
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn into_plan(self) -> Plan {
        self.plan
    }

    /// Save the draft as it stands.
    pub async fn save(&self, client: &PlanClient) -> Result<Notice> {
        client.save_draft(&self.goal, &self.plan).await?;
        Ok(Notice::success("Plan saved successfully"))
    }

    /// Change the objective and save.
    pub async fn set_objective(&mut self, client: &PlanClient, objective: &str) -> Result<Notice> {
        let mut updated = self.plan.clone();
        updated.objective = objective.to_string();
        self.adopt(client, updated).await
    }

    /// Change one task field and save.
    pub async fn edit_task(&mut self, client: &PlanClient, params: &EditTask) -> Result<Notice> {
        self.plan.check_index(params.index)?;
        let mut updated = self.plan.clone();
        updated.tasks[params.index].set_field(params.field, params.value.as_str());
        self.adopt(client, updated).await
    }

    async fn adopt(&mut self, client: &PlanClient, updated: Plan) -> Result<Notice> {
        client.save_draft(&self.goal, &updated).await?;
        self.plan = updated;
        Ok(Notice::success("Plan saved successfully"))
    }
}
