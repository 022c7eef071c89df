use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CheckArgs, ClosureCommands, SettingsCommands};

/// Closure dates and lesson-series conflict checks for LessonLoop
///
/// Record the days a music school is closed, then check a recurring lesson
/// series before saving it to see which lessons would land on a closure. The
/// same operations are available to AI assistants through an MCP server.
#[derive(Parser)]
#[command(version, about, name = "lessonloop")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lessonloop/lessonloop.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Organisation to work with
    #[arg(long, global = true, env = "LESSONLOOP_ORG", default_value = "default")]
    pub org: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the LessonLoop CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage closure dates
    #[command(alias = "c")]
    Closure {
        #[command(subcommand)]
        command: ClosureCommands,
    },
    /// Check a recurring lesson series against closure dates
    #[command(alias = "k")]
    Check(CheckArgs),
    /// Show or change organisation settings
    #[command(alias = "s")]
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Start the MCP server
    Serve,
}
