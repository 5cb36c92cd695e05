use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, GoalCommands, TaskCommands};

/// Command-line client for AI-generated goal plans
///
/// Roadmap turns a free-text goal into a step-by-step plan and keeps your
/// saved plans in sync with the plan store: list and inspect goals, edit
/// objectives and tasks, tick tasks off and track progress.
#[derive(Parser)]
#[command(version, about, name = "roadmap")]
pub struct Args {
    /// Base URL of the plan store API
    #[arg(long, global = true, env = "ROADMAP_API_URL")]
    pub api_url: Option<String>,

    /// User id every request is made on behalf of
    #[arg(long, global = true, env = "ROADMAP_USER_ID")]
    pub user_id: Option<String>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/roadmap/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Roadmap CLI
///
/// - `generate`: Ask the generation service for a new plan
/// - `goal`: Operations on saved goals
/// - `task`: Operations on the tasks of a saved goal
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Manage saved goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage the tasks of a saved goal
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
