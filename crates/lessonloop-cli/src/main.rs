//! LessonLoop CLI Application
//!
//! Command-line interface and MCP server for closure dates and lesson-series
//! conflict checks.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lessonloop_core::SchedulerBuilder;
use log::info;
use mcp::{run_stdio_server, LessonLoopMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        org,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .with_organisation(org)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("LessonLoop started for org {}", scheduler.org_id());

    match command {
        Some(Closure { command }) => {
            Cli::new(scheduler, renderer)
                .handle_closure_command(command)
                .await
        }
        Some(Check(args)) => Cli::new(scheduler, renderer).check_series(args).await,
        Some(Settings { command }) => {
            Cli::new(scheduler, renderer)
                .handle_settings_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting LessonLoop MCP server");
            run_stdio_server(LessonLoopMcpServer::new(scheduler))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(scheduler, renderer).list_upcoming_closures().await,
    }
}
