use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddPromptArgs, DeletePromptArgs, FilterArgs, ListArgs, ResetArgs, SearchArgs, ShowPromptArgs,
    UpdatePromptArgs,
};

/// Command-line interface for the prompt store
///
/// Prompt Store keeps a personal library of reusable text prompts, each with a
/// unique title and any number of tags. Prompts can be managed from the
/// command line or served to AI assistants over MCP (Model Context Protocol)
/// with the `serve` command.
#[derive(Parser)]
#[command(version, about, name = "prompt-store")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/prompt-store/prompts.db
    #[arg(long, global = true, env = "PROMPT_STORE_DB")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Delete every prompt and tag before running the command
    #[arg(long, global = true)]
    pub reset: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the prompt store
///
/// Without a command the most recently updated prompts are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new prompt
    #[command(alias = "a")]
    Add(AddPromptArgs),
    /// Show a prompt with its full content
    #[command(aliases = ["s", "get"])]
    Show(ShowPromptArgs),
    /// Replace a prompt's title, content and tags
    #[command(alias = "u")]
    Update(UpdatePromptArgs),
    /// Delete a prompt permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePromptArgs),
    /// List prompts, most recently updated first
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Search prompt titles and content
    #[command(alias = "f")]
    Search(SearchArgs),
    /// List prompts carrying any of the given tags
    #[command(alias = "t")]
    Filter(FilterArgs),
    /// List all tags with their usage counts
    Tags,
    /// Delete every prompt and tag
    Reset(ResetArgs),
    /// Start the MCP server on stdio
    Serve,
}
