//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use minwon_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned console view
    Full,
    /// Numbered plain text, ready to paste
    Text,
    /// Wire-form JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for minwon-desk
#[derive(Parser, Debug)]
#[command(name = "minwon-desk")]
#[command(author, version, about = "Draft, edit and finalize replies to civil complaints")]
#[command(long_about = r#"
minwon-desk drives the reply workflow of a civil complaint backend.

A complaint moves through these phases:
  unanswered → drafted → editing → held | completed

Drafts are generated by the backend from the complaint and the review
points you steer it with. Pick a draft, edit it, then hold it (save and
keep working later) or complete it (final, with an optional 1-3 rating).

Configuration files are loaded from (in priority order):
1. MINWON_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./minwon.toml       Project-level config
4. ~/.config/minwon-desk/config.toml   Global config

Example:
  minwon-desk show 42
  minwon-desk steer 42 --topic "Repair schedule" --bullet "Mention the date" --regenerate
  minwon-desk hold 42 --draft 2 --footer "Thank you."
  minwon-desk complete 42 --rating 3
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Workflow commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a complaint, its phase and a draft
    Show {
        /// Complaint id
        id: u64,
        /// Draft to display (1-based)
        #[arg(short, long, default_value_t = 1)]
        draft: usize,
    },

    /// Generate the first drafts
    Generate {
        /// Complaint id
        id: u64,
    },

    /// Regenerate drafts from the saved review points
    Regenerate {
        /// Complaint id
        id: u64,
    },

    /// Show or edit the review points that steer generation
    Steer(SteerArgs),

    /// List suggestions from similar past replies
    Similar {
        /// Complaint id
        id: u64,
    },

    /// Print a draft as plain text for copying
    Export {
        /// Complaint id
        id: u64,
        /// Draft to export (1-based)
        #[arg(short, long, default_value_t = 1)]
        draft: usize,
    },

    /// Edit a draft and save it without finalizing (status: editing)
    Hold {
        /// Complaint id
        id: u64,
        #[command(flatten)]
        edits: EditArgs,
    },

    /// Edit a draft and finalize it (status: completed)
    Complete {
        /// Complaint id
        id: u64,
        #[command(flatten)]
        edits: EditArgs,
        /// Quality rating (1-3); skips the rating prompt
        #[arg(long, value_name = "1-3")]
        rating: Option<i64>,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl Command {
    /// Complaint the command operates on
    pub fn complaint_id(&self) -> u64 {
        match self {
            Command::Show { id, .. }
            | Command::Generate { id }
            | Command::Regenerate { id }
            | Command::Similar { id }
            | Command::Export { id, .. }
            | Command::Hold { id, .. }
            | Command::Complete { id, .. } => *id,
            Command::Steer(args) => args.id,
        }
    }
}

/// Review point edits
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SteerArgs {
    /// Complaint id
    pub id: u64,

    /// Topic of the review point to add (or to edit with --point)
    #[arg(long)]
    pub topic: Option<String>,

    /// Bullet text for that review point (repeatable)
    #[arg(long = "bullet", value_name = "TEXT")]
    pub bullets: Vec<String>,

    /// Edit this existing review point (1-based) instead of adding one
    #[arg(long)]
    pub point: Option<usize>,

    /// Remove this bullet (1-based) from --point
    #[arg(long, requires = "point")]
    pub remove_bullet: Option<usize>,

    /// Regenerate drafts after saving
    #[arg(long)]
    pub regenerate: bool,
}

impl SteerArgs {
    /// Whether any edit was requested
    pub fn has_edits(&self) -> bool {
        self.topic.is_some() || !self.bullets.is_empty() || self.remove_bullet.is_some()
    }
}

/// Edits applied to the chosen draft before it is saved
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct EditArgs {
    /// Draft to open (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub draft: usize,

    /// Replace the greeting
    #[arg(long)]
    pub header: Option<String>,

    /// Replace the summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Replace the closing
    #[arg(long)]
    pub footer: Option<String>,

    /// Remove a body block (1-based, as numbered in the draft; repeatable)
    #[arg(long = "remove-block", value_name = "N")]
    pub remove_blocks: Vec<usize>,

    /// Append a block with this title and one empty bullet (repeatable)
    #[arg(long = "add-block", value_name = "TITLE")]
    pub add_blocks: Vec<String>,

    /// Append a block from a similar past reply (1-based, see `similar`; repeatable)
    #[arg(long = "seed", value_name = "N")]
    pub seeds: Vec<usize>,
}
