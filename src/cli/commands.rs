use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::aesthetic::{Aesthetic, Filter};

#[derive(Parser)]
#[command(name = "mb", about = concat!("moodboard v", env!("CARGO_PKG_VERSION"), " - pins, filters and boards"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory with a default config and the sample pins
    Init(InitArgs),
    /// List pins, optionally filtered by aesthetic and searched by title/tag
    List(ListArgs),
    /// Show one pin with its attribution and board membership
    Show(ShowArgs),
    /// Add a pin (newest first)
    Upload(UploadArgs),
    /// List all boards and their pins
    Boards,
    /// Board management
    Board(BoardCmd),
    /// Save a pin to a board, or remove it if already saved
    Save(SaveArgs),
    /// List the aesthetic filter options
    Aesthetics,
    /// View or manage the recovery log
    Recovery(RecoveryCmd),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite existing pins, boards and config
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Search text matched against titles and tags (case-insensitive)
    pub query: Option<String>,
    /// Aesthetic to filter by, or "all"
    #[arg(short, long, default_value = "all")]
    pub filter: Filter,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Pin ID
    pub id: String,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Title (default: "Untitled")
    #[arg(long, default_value = "")]
    pub title: String,
    /// Image URL (default: a placeholder)
    #[arg(long, default_value = "")]
    pub image: String,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
    /// Aesthetic (repeatable; default: cottagecore)
    #[arg(long = "aesthetic", short = 'a')]
    pub aesthetics: Vec<Aesthetic>,
    /// Author credit (default: "Uploader")
    #[arg(long, default_value = "")]
    pub author: String,
}

#[derive(Args)]
pub struct BoardCmd {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new, empty board
    New {
        /// Board name
        name: String,
    },
    /// Show one board with its pins
    Show {
        /// Board ID
        id: String,
    },
}

#[derive(Args)]
pub struct SaveArgs {
    /// Pin ID
    pub pin: String,
    /// Board ID
    pub board: String,
}

#[derive(Args)]
pub struct RecoveryCmd {
    #[command(subcommand)]
    pub action: Option<RecoveryAction>,
    /// Number of entries to show
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

#[derive(Subcommand)]
pub enum RecoveryAction {
    /// Remove old entries
    Prune {
        /// Remove entries older than this many days
        #[arg(long, conflicts_with = "all")]
        days: Option<i64>,
        /// Remove every entry
        #[arg(long)]
        all: bool,
    },
}
