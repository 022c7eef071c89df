//! Command-line argument wrappers and command handlers
//!
//! Each command's arguments live in a clap-derived struct that converts into
//! the matching core parameter type, so clap concerns stay out of
//! `lessonloop-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! Arguments that need a default computed at run time (today's date) convert
//! through an `into_params` method instead of `From`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::{civil::Date, Span, Zoned};
use lessonloop_core::{
    display::{CreateResult, DayMonthYear, DeleteResult},
    params::{CheckSeries, ClosuresOnDate, CreateClosure, Id, ListClosures, SetBlockScheduling},
    Scheduler,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Today's date in the system time zone
fn today() -> Date {
    Zoned::now().date()
}

// ============================================================================
// Closure commands
// ============================================================================

/// Record a closure date
///
/// Without `--location` the closure applies to every location of the
/// organisation.
#[derive(Args)]
pub struct AddClosureArgs {
    /// Date of the closure (YYYY-MM-DD)
    pub date: String,
    /// Why lessons cannot take place, e.g. "Bank holiday"
    pub reason: String,
    /// Limit the closure to one location
    #[arg(short, long, conflicts_with = "all_locations")]
    pub location: Option<String>,
    /// Apply the closure to every location (the default)
    #[arg(short, long)]
    pub all_locations: bool,
}

impl From<AddClosureArgs> for CreateClosure {
    fn from(val: AddClosureArgs) -> Self {
        CreateClosure {
            all_locations: val.all_locations || val.location.is_none(),
            date: val.date,
            reason: val.reason,
            location_id: val.location,
        }
    }
}

/// List closure dates in a date range
///
/// Defaults to the year starting today.
#[derive(Args)]
pub struct ListClosuresArgs {
    /// First date to include (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub from: Option<String>,
    /// Last date to include (YYYY-MM-DD), defaults to one year after --from
    #[arg(short, long)]
    pub to: Option<String>,
}

impl ListClosuresArgs {
    /// Fills in missing bounds relative to `today`.
    pub fn into_params(self, today: Date) -> Result<ListClosures> {
        let from = match self.from {
            Some(from) => from,
            None => today.to_string(),
        };
        let to = match self.to {
            Some(to) => to,
            None => {
                let start: Date = from
                    .parse()
                    .with_context(|| format!("Invalid --from date '{from}'"))?;
                start
                    .checked_add(Span::new().years(1))
                    .unwrap_or(Date::MAX)
                    .to_string()
            }
        };
        Ok(ListClosures { from, to })
    }
}

/// Show every closure on one date
#[derive(Args)]
pub struct ClosuresOnDateArgs {
    /// Date to look up (YYYY-MM-DD)
    pub date: String,
}

impl From<ClosuresOnDateArgs> for ClosuresOnDate {
    fn from(val: ClosuresOnDateArgs) -> Self {
        ClosuresOnDate { date: val.date }
    }
}

/// Remove a closure date permanently
#[derive(Args)]
pub struct RemoveClosureArgs {
    /// ID of the closure to remove
    pub id: u64,
}

impl From<RemoveClosureArgs> for Id {
    fn from(val: RemoveClosureArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ClosureCommands {
    /// Record a closure date
    #[command(alias = "a")]
    Add(AddClosureArgs),
    /// List closure dates in a date range
    #[command(aliases = ["l", "ls"])]
    List(ListClosuresArgs),
    /// Show every closure on one date
    On(ClosuresOnDateArgs),
    /// Remove a closure date permanently
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveClosureArgs),
}

// ============================================================================
// Series check
// ============================================================================

/// Check a recurring lesson series against closure dates
///
/// Lists every lesson that would fall on a closure at the series' location.
/// Conflicts are reported but do not make the command fail.
#[derive(Args)]
pub struct CheckArgs {
    /// Date of the first lesson (YYYY-MM-DD), defaults to today
    pub start: Option<String>,
    /// Weeks between lessons
    #[arg(short, long = "interval", default_value_t = 1)]
    pub interval_weeks: u32,
    /// Number of lessons in the series
    #[arg(short = 'n', long = "lessons")]
    pub total_lessons: u32,
    /// Location the lessons are taught at
    #[arg(short, long)]
    pub location: Option<String>,
}

impl CheckArgs {
    /// Uses `today` when no start date was given.
    pub fn into_params(self, today: Date) -> CheckSeries {
        CheckSeries {
            start_date: Some(self.start.unwrap_or_else(|| today.to_string())),
            interval_weeks: self.interval_weeks,
            total_lessons: self.total_lessons,
            location_id: self.location,
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// How closure dates are enforced when scheduling
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BlockSchedulingArg {
    /// Lessons may not be scheduled on closure dates
    On,
    /// Closure conflicts are shown as warnings only
    Off,
    /// Forget the setting and use the default (on)
    Default,
}

/// Show or change closure enforcement
#[derive(Args)]
pub struct BlockSchedulingArgs {
    /// New setting; omit to show the current one
    pub state: Option<BlockSchedulingArg>,
}

impl From<BlockSchedulingArg> for SetBlockScheduling {
    fn from(val: BlockSchedulingArg) -> Self {
        let enabled = match val {
            BlockSchedulingArg::On => Some(true),
            BlockSchedulingArg::Off => Some(false),
            BlockSchedulingArg::Default => None,
        };
        SetBlockScheduling { enabled }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show or change whether closure dates block scheduling
    #[command(alias = "block")]
    BlockScheduling(BlockSchedulingArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs CLI commands against a scheduler and renders the output.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_closure_command(&self, command: ClosureCommands) -> Result<()> {
        match command {
            ClosureCommands::Add(args) => {
                let closure = self
                    .scheduler
                    .create_closure(&args.into())
                    .await
                    .context("Failed to add closure date")?;
                self.renderer.render(&CreateResult::new(closure).to_string())
            }
            ClosureCommands::List(args) => {
                let params = args.into_params(today())?;
                self.list_closures(&params).await
            }
            ClosureCommands::On(args) => {
                let params: ClosuresOnDate = args.into();
                let closures = self
                    .scheduler
                    .closures_for_date(&params)
                    .await
                    .context("Failed to look up closure dates")?;
                self.renderer
                    .render(&format!("# Closures on {}\n\n{closures}", params.date))
            }
            ClosureCommands::Remove(args) => {
                let params: Id = args.into();
                let closure = self
                    .scheduler
                    .delete_closure(&params)
                    .await
                    .with_context(|| format!("Failed to remove closure {}", params.id))?;
                self.renderer.render(&DeleteResult::new(closure).to_string())
            }
        }
    }

    /// Closures of the coming year, shown when no command is given.
    pub async fn list_upcoming_closures(&self) -> Result<()> {
        let params = ListClosuresArgs {
            from: None,
            to: None,
        }
        .into_params(today())?;
        self.list_closures(&params).await
    }

    pub async fn list_closures(&self, params: &ListClosures) -> Result<()> {
        debug!("Listing closures from {} to {}", params.from, params.to);
        let range = params.range()?;
        let closures = self
            .scheduler
            .list_closures(params)
            .await
            .context("Failed to list closure dates")?;

        self.renderer.render(&format!(
            "# Closure dates {} to {}\n\n{closures}",
            DayMonthYear(&range.start),
            DayMonthYear(&range.end)
        ))
    }

    pub async fn check_series(&self, args: CheckArgs) -> Result<()> {
        let params = args.into_params(today());
        let check = self
            .scheduler
            .check_series(&params)
            .await
            .context("Failed to check lesson series")?;

        self.renderer.render(&format!("# Closure check\n\n{check}"))
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::BlockScheduling(BlockSchedulingArgs { state: None }) => {
                let settings = self
                    .scheduler
                    .block_scheduling()
                    .await
                    .context("Failed to read organisation settings")?;
                self.renderer.render(&settings.to_string())
            }
            SettingsCommands::BlockScheduling(BlockSchedulingArgs { state: Some(state) }) => {
                let settings = self
                    .scheduler
                    .set_block_scheduling(&state.into())
                    .await
                    .context("Failed to update organisation settings")?;
                self.renderer.render(&settings.to_string())
            }
        }
    }
}
