mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notekeep", version, about = "Hierarchical markdown notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Create a note
    New(NewArgs),

    /// Print a note body
    Get {
        /// Root-relative filename, e.g. "project/task.md"
        filename: String,
    },

    /// List notes at one level of the hierarchy
    List(ListArgs),

    /// Replace a note's content and tags
    Update(UpdateArgs),

    /// Delete a note and clean up its directory
    Delete { filename: String },

    /// Add or remove tags on a note
    Tag(TagArgs),

    /// Move a note into another folder (or the root)
    Mv {
        filename: String,
        /// Destination folder; omit to move to the root
        target: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Note title (also used to derive the filename)
    pub title: String,

    #[arg(long, default_value = "")]
    pub content: String,

    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Parent note (with or without .md) to nest under, e.g. "project/subproject"
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub parent: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub filename: String,

    #[arg(long, default_value = "")]
    pub content: String,

    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Debug, Subcommand)]
pub enum TagAction {
    /// Add tags (result is de-duplicated and sorted)
    Add { filename: String, tags: Vec<String> },
    /// Remove tags (remaining order is preserved)
    Rm { filename: String, tags: Vec<String> },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::New(args) => cmd::new::run(config, profile, args),
        Commands::Get { filename } => cmd::get::run(config, profile, &filename),
        Commands::List(args) => cmd::list::run(config, profile, args),
        Commands::Update(args) => cmd::update::run(config, profile, args),
        Commands::Delete { filename } => cmd::delete::run(config, profile, &filename),
        Commands::Tag(args) => cmd::tag::run(config, profile, args.action),
        Commands::Mv { filename, target } => {
            cmd::mv::run(config, profile, &filename, target.as_deref());
        }
    }
}
