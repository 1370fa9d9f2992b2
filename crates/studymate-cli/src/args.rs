//! Command-line arguments using clap
//!
//! The argument structures here carry clap derives only. Each one converts
//! into a framework-free parameter structure of `studymate_core::params`
//! through `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Core Logic
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{tz::TimeZone, Timestamp};
use studymate_core::params::{CompleteTask, EvaluateProgress, ParseResponse, DEFAULT_CHUNK_SIZE};

/// Command-line front end for the Studymate stream core
///
/// Replays raw model responses through the streaming pipeline and tracks
/// progress on started studyplans stored as JSON files.
#[derive(Parser)]
#[command(version, about, name = "sm")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Stream a raw model response and collect its messages
    Parse(ParseArgs),
    /// Show the progress of a started studyplan
    Progress(ProgressArgs),
    /// Complete one of today's tasks of a started studyplan
    Complete(CompleteArgs),
    /// Start a studyplan, printing the started plan as JSON
    Start(StartArgs),
    /// Print a studyplan in the tagged format the model writes
    Prompt(PromptArgs),
}

/// Stream a raw model response
///
/// The response is fed to the pipeline in chunks of `--chunk-size`
/// characters to mimic token streaming. Markdown is echoed as it arrives;
/// the collected messages are printed at the end.
#[derive(ClapArgs)]
pub struct ParseArgs {
    /// File holding the raw response; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Number of characters per simulated chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Print the collected chat messages as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ParseArgs> for ParseResponse {
    fn from(val: &ParseArgs) -> Self {
        ParseResponse {
            chunk_size: val.chunk_size,
        }
    }
}

/// Show progress of a started studyplan
#[derive(ClapArgs)]
pub struct ProgressArgs {
    /// Started studyplan JSON file
    pub file: PathBuf,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// Print the progress state as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<ProgressArgs> for EvaluateProgress {
    fn from(val: ProgressArgs) -> Self {
        EvaluateProgress {
            timezone: val.clock.timezone(),
            now: val.clock.now,
        }
    }
}

/// Complete a task of the current day
///
/// The file is rewritten with the completion timestamp.
#[derive(ClapArgs)]
pub struct CompleteArgs {
    /// Started studyplan JSON file
    pub file: PathBuf,

    /// Zero-based index of the task within today's tasks
    pub index: usize,

    #[command(flatten)]
    pub clock: ClockArgs,
}

impl From<CompleteArgs> for CompleteTask {
    fn from(val: CompleteArgs) -> Self {
        CompleteTask {
            index: val.index,
            timezone: val.clock.timezone(),
            now: val.clock.now,
        }
    }
}

/// Start a finalized studyplan
#[derive(ClapArgs)]
pub struct StartArgs {
    /// Studyplan JSON file
    pub file: PathBuf,

    /// Identifier of the plan this one was started from
    #[arg(long)]
    pub original_id: Option<String>,
}

/// Print the model format of a studyplan
#[derive(ClapArgs)]
pub struct PromptArgs {
    /// Studyplan JSON file
    pub file: PathBuf,
}

/// Timezone and clock overrides shared by the progress commands.
#[derive(ClapArgs)]
pub struct ClockArgs {
    /// IANA timezone of the user; defaults to the system timezone
    #[arg(long)]
    pub timezone: Option<String>,

    /// Evaluate at this instant (RFC 3339) instead of the current time
    #[arg(long)]
    pub now: Option<Timestamp>,
}

impl ClockArgs {
    fn timezone(&self) -> String {
        self.timezone.clone().unwrap_or_else(system_timezone)
    }
}

/// IANA name of the system timezone, `UTC` if it has none.
fn system_timezone() -> String {
    TimeZone::system()
        .iana_name()
        .unwrap_or("UTC")
        .to_string()
}
