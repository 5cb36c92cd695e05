//! Command handlers: run one command against the plan store and render the
//! result.

use roadmap_core::{
    display::{Goals, Notice, ProgressBar},
    params::{DeleteTask, SetCompletion},
    DashboardStats, GoalSession, PlanClient, PlanDraft, Result,
};

use crate::{
    cli::{GenerateArgs, GoalCommands, TaskCommands},
    renderer::TerminalRenderer,
};

/// Runs commands with one client and renderer.
pub struct Cli {
    client: PlanClient,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: PlanClient, renderer: TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    fn notice(&self, notice: &Notice) {
        self.renderer.render_notice(notice);
    }

    /// Session over a freshly fetched goal.
    async fn session(&self, goal_id: &str) -> Result<GoalSession> {
        let goal = self.client.fetch_goal(goal_id).await?;
        Ok(GoalSession::new(self.client.clone(), goal))
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let draft = PlanDraft::generate(&self.client, &(&args).into()).await?;
        self.renderer.render(&draft.plan().to_string());

        if args.save {
            let notice = draft.save(&self.client).await?;
            self.notice(&notice);
        }
        Ok(())
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::List(args) => {
                let mut goals = self.client.list_goals().await?;
                args.sort.apply(&mut goals);
                self.renderer.render(&Goals(goals).to_string());
            }
            GoalCommands::Show(args) => {
                let session = GoalSession::open(self.client.clone(), &args.id).await?;
                self.renderer.render(&session.snapshot().to_string());
            }
            GoalCommands::Objective(args) => {
                let session = self.session(&args.id).await?;
                let notice = session.set_objective(&args.objective).await?;
                self.notice(&notice);
            }
            GoalCommands::Progress(args) => {
                let session = GoalSession::open(self.client.clone(), &args.id).await?;
                let progress = session.progress();
                self.renderer.render(&format!(
                    "# {}\n\n- Progress: {progress}\n- {}\n",
                    session.snapshot().query,
                    ProgressBar(&progress)
                ));
            }
            GoalCommands::Delete(args) => {
                self.client.delete_goal(&args.into()).await?;
                self.notice(&Notice::success("Goal deleted successfully"));
            }
            GoalCommands::Stats => {
                let history = self.client.list_goals().await?;
                self.renderer
                    .render(&DashboardStats::from_history(&history).to_string());
            }
        }
        Ok(())
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Edit(args) => {
                let session = self.session(&args.goal).await?;
                let notice = session.edit_task_field(&args.into()).await?;
                self.notice(&notice);
            }
            TaskCommands::Complete(args) => {
                let session = self.session(&args.goal).await?;
                let notice = session
                    .set_completion(&SetCompletion {
                        index: args.index,
                        completed: true,
                    })
                    .await?;
                self.completion_notice(&session, &notice);
            }
            TaskCommands::Reopen(args) => {
                let session = self.session(&args.goal).await?;
                let notice = session
                    .set_completion(&SetCompletion {
                        index: args.index,
                        completed: false,
                    })
                    .await?;
                self.completion_notice(&session, &notice);
            }
            TaskCommands::Toggle(args) => {
                let session = self.session(&args.goal).await?;
                let notice = session.toggle_completion(args.index).await?;
                self.completion_notice(&session, &notice);
            }
            TaskCommands::Delete(args) => {
                let params = DeleteTask::from(&args);
                params.validate()?;
                let session = self.session(&args.goal).await?;
                let notice = session.delete_task(&params).await?;
                self.notice(&notice);
            }
        }
        Ok(())
    }

    fn completion_notice(&self, session: &GoalSession, notice: &Notice) {
        self.notice(notice);
        self.renderer
            .render(&format!("- Progress: {}\n", session.progress()));
    }
}
