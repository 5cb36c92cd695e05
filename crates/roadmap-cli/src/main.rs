//! Roadmap CLI Application
//!
//! Command-line client for generating goal plans and keeping saved plans in
//! sync with the plan store.

mod args;
mod cli;
mod handlers;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use roadmap_core::{display::Notice, Config, PlanClientBuilder, SyncError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let renderer = TerminalRenderer::new(!args.no_color);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!("{error:?}");
            renderer.render_notice(&failure_notice(&error));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let Args {
        api_url,
        user_id,
        config,
        no_color,
        command,
    } = args;

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    let client = PlanClientBuilder::new()
        .with_config(config.with_overrides(Config { api_url, user_id }))
        .build()
        .context("Failed to initialize client")?;
    info!("Roadmap started for user {}", client.user_id());

    let cli = Cli::new(client, TerminalRenderer::new(!no_color));
    match command {
        Commands::Generate(args) => cli.generate(args).await?,
        Commands::Goal { command } => cli.handle_goal_command(command).await?,
        Commands::Task { command } => cli.handle_task_command(command).await?,
    }
    Ok(())
}

/// The one message shown for a failed command.
fn failure_notice(error: &anyhow::Error) -> Notice {
    match error.downcast_ref::<SyncError>() {
        Some(sync_error) => Notice::from(sync_error),
        None => Notice::failure(format!("{error:#}")),
    }
}
