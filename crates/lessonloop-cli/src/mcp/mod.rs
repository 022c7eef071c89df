//! MCP server implementation for LessonLoop
//!
//! Exposes closure dates and series checks to AI assistants over the Model
//! Context Protocol, scoped to the organisation the server was started for.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use lessonloop_core::Scheduler;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    CheckSeries, ClosuresOnDate, CreateClosure, FormatConflicts, Id, ListClosures, McpResult,
    SetBlockScheduling,
};

/// MCP server for LessonLoop
#[derive(Clone)]
pub struct LessonLoopMcpServer {
    scheduler: Arc<Scheduler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LessonLoopMcpServer {
    /// Create a new LessonLoop MCP server
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(scheduler),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.scheduler))
    }

    #[tool(
        name = "list_closures",
        description = "List the organisation's closure dates between two dates (inclusive, YYYY-MM-DD). Each entry shows its ID, date, reason, and whether it applies to all locations or a single one."
    )]
    async fn list_closures(&self, params: Parameters<ListClosures>) -> McpResult {
        self.handlers().list_closures(params).await
    }

    #[tool(
        name = "closures_on_date",
        description = "Show every closure recorded for one date (YYYY-MM-DD), whatever location it applies to."
    )]
    async fn closures_on_date(&self, params: Parameters<ClosuresOnDate>) -> McpResult {
        self.handlers().closures_on_date(params).await
    }

    #[tool(
        name = "add_closure",
        description = "Record a date on which lessons cannot take place. Provide the date (YYYY-MM-DD) and a reason. Set all_locations=true for an organisation-wide closure, or give a location_id to close a single location; not both."
    )]
    async fn add_closure(&self, params: Parameters<CreateClosure>) -> McpResult {
        self.handlers().add_closure(params).await
    }

    #[tool(
        name = "remove_closure",
        description = "Permanently remove a closure date by ID. Lessons already scheduled are not affected."
    )]
    async fn remove_closure(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().remove_closure(params).await
    }

    #[tool(
        name = "check_series",
        description = "Check a recurring lesson series before it is created. Give the first lesson date (YYYY-MM-DD), interval_weeks (1 = weekly, 2 = fortnightly), total_lessons, and optionally the location_id. Returns every lesson that falls on a closure applying to that location, and whether the organisation blocks scheduling on closure dates."
    )]
    async fn check_series(&self, params: Parameters<CheckSeries>) -> McpResult {
        self.handlers().check_series(params).await
    }

    #[tool(
        name = "set_block_scheduling",
        description = "Choose whether closure dates block scheduling (enabled=true) or only produce warnings (enabled=false). Omit enabled to restore the default, which blocks."
    )]
    async fn set_block_scheduling(&self, params: Parameters<SetBlockScheduling>) -> McpResult {
        self.handlers().set_block_scheduling(params).await
    }

    #[tool(
        name = "format_conflicts",
        description = "Format a list of conflicts (lesson_number, date as YYYY-MM-DD, reason) as bullet lines in the given order, with dates shown as dd/mm/yyyy. Returns an empty string for an empty list."
    )]
    async fn format_conflicts(&self, params: Parameters<FormatConflicts>) -> McpResult {
        self.handlers().format_conflicts(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LessonLoopMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "lessonloop".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(format!(
                r#"LessonLoop tracks the days a music school is closed and checks recurring lesson series against them.

All tools work on the organisation "{}". Dates are given as YYYY-MM-DD.

## Core Concepts
- **Closure dates**: days without lessons, either organisation-wide or for one location
- **Series**: a first lesson date repeated every interval_weeks weeks, total_lessons times
- **Conflicts**: lessons of a series that fall on a closure applying to the series' location

## Workflow
1. Before creating a series, call `check_series` with its dates and location
2. If conflicts are reported and scheduling is blocked, suggest another start date or interval
3. Use `list_closures` or `closures_on_date` to explain a conflict

## Tool Categories
- **Closure Management**: list_closures, closures_on_date, add_closure, remove_closure
- **Series Checks**: check_series, format_conflicts
- **Settings**: set_block_scheduling"#,
                self.scheduler.org_id()
            )),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: LessonLoopMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Starting LessonLoop MCP server on stdio for org {}",
        server.scheduler.org_id()
    );
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
