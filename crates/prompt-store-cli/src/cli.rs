//! Command handlers and their clap argument wrappers
//!
//! Each subcommand has an argument struct carrying the clap-specific
//! attributes and a conversion into the matching core parameter type, so the
//! core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PromptStore
//! ```
//!
//! Results are rendered as markdown through [`TerminalRenderer`] or, with
//! `--json`, printed as the raw serialized payload. Typed store errors
//! (`NOT_FOUND`, `DUPLICATE_TITLE`, ...) are reported as an error response and
//! turn into a non-zero exit status; anything else propagates as a fatal
//! error.

use std::{
    fmt::Display,
    io::{self, IsTerminal},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use clap::Args;
use log::debug;
use prompt_store_core::{params::*, PromptStore};
use serde::Serialize;

use crate::{
    args::Commands,
    mcp::{run_stdio_server, PromptStoreMcpServer},
    renderer::TerminalRenderer,
};

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Add a new prompt
///
/// The content is read from standard input when `--content` is omitted, so
/// longer prompts can be piped in from a file.
#[derive(Args)]
pub struct AddPromptArgs {
    /// Unique title of the prompt
    #[arg(help = "Unique title of the prompt (1-200 characters)")]
    pub title: String,
    #[arg(
        short,
        long,
        help = "Prompt content; read from standard input when omitted"
    )]
    pub content: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Tags as a comma-separated list (letters, numbers, dash, underscore)"
    )]
    pub tags: Vec<String>,
}

impl TryFrom<AddPromptArgs> for AddPrompt {
    type Error = anyhow::Error;

    fn try_from(val: AddPromptArgs) -> Result<Self> {
        Ok(AddPrompt {
            title: val.title,
            content: content_or_stdin(val.content)?,
            tags: val.tags,
        })
    }
}

/// Show a prompt with its full content and tags
#[derive(Args)]
pub struct ShowPromptArgs {
    #[arg(help = "Unique identifier of the prompt to show")]
    pub id: String,
}

impl From<ShowPromptArgs> for Id {
    fn from(val: ShowPromptArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace a prompt's title, content and tags
///
/// Updates are full replacements: tags not passed with `--tags` are removed
/// from the prompt.
#[derive(Args)]
pub struct UpdatePromptArgs {
    #[arg(help = "Unique identifier of the prompt to update")]
    pub id: String,
    #[arg(long, help = "New title for the prompt")]
    pub title: String,
    #[arg(
        short,
        long,
        help = "New prompt content; read from standard input when omitted"
    )]
    pub content: Option<String>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Complete new tag set as a comma-separated list"
    )]
    pub tags: Vec<String>,
}

impl TryFrom<UpdatePromptArgs> for UpdatePrompt {
    type Error = anyhow::Error;

    fn try_from(val: UpdatePromptArgs) -> Result<Self> {
        Ok(UpdatePrompt {
            id: val.id,
            title: val.title,
            content: content_or_stdin(val.content)?,
            tags: val.tags,
        })
    }
}

/// Delete a prompt permanently
#[derive(Args)]
pub struct DeletePromptArgs {
    #[arg(help = "Unique identifier of the prompt to permanently delete")]
    pub id: String,
}

impl From<DeletePromptArgs> for Id {
    fn from(val: DeletePromptArgs) -> Self {
        Id { id: val.id }
    }
}

/// Page window shared by the listing commands
#[derive(Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 10, help = "Maximum number of prompts to show (1-100)")]
    pub limit: i64,
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Number of prompts to skip"
    )]
    pub offset: i64,
}

/// List prompts, most recently updated first
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

impl From<ListArgs> for ListPrompts {
    fn from(val: ListArgs) -> Self {
        ListPrompts {
            limit: val.page.limit,
            offset: val.page.offset,
        }
    }
}

/// Search prompt titles and content
///
/// Matching is a case-insensitive substring match; `%` and `_` are matched
/// literally.
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Text to look for in titles and content")]
    pub query: String,
    #[command(flatten)]
    pub page: PageArgs,
}

impl From<SearchArgs> for SearchPrompts {
    fn from(val: SearchArgs) -> Self {
        SearchPrompts {
            query: val.query,
            limit: val.page.limit,
            offset: val.page.offset,
        }
    }
}

/// List prompts carrying any of the given tags
#[derive(Args)]
pub struct FilterArgs {
    #[arg(
        required = true,
        value_delimiter = ',',
        help = "Tags to match; a prompt matches if it has any of them"
    )]
    pub tags: Vec<String>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl From<FilterArgs> for FilterByTags {
    fn from(val: FilterArgs) -> Self {
        FilterByTags {
            tags: val.tags,
            limit: val.page.limit,
            offset: val.page.offset,
        }
    }
}

/// Delete every prompt and tag
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

/// Prompt content from the flag, or from standard input when it is piped.
fn content_or_stdin(content: Option<String>) -> Result<String> {
    match content {
        Some(content) => Ok(content),
        None if io::stdin().is_terminal() => Ok(String::new()),
        None => {
            let content =
                io::read_to_string(io::stdin()).context("Failed to read prompt content")?;
            Ok(content.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs subcommands against a prompt store and renders their results
pub struct Cli {
    store: PromptStore,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(store: PromptStore, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            store,
            renderer,
            json,
        }
    }

    /// Dispatches a parsed subcommand.
    pub async fn run(&self, command: Commands) -> Result<ExitCode> {
        match command {
            Commands::Add(args) => self.add_prompt(&AddPrompt::try_from(args)?).await,
            Commands::Show(args) => self.show_prompt(&Id::from(args)).await,
            Commands::Update(args) => self.update_prompt(&UpdatePrompt::try_from(args)?).await,
            Commands::Delete(args) => self.delete_prompt(&Id::from(args)).await,
            Commands::List(args) => self.list_prompts(&ListPrompts::from(args)).await,
            Commands::Search(args) => self.search_prompts(&SearchPrompts::from(args)).await,
            Commands::Filter(args) => self.filter_by_tags(&FilterByTags::from(args)).await,
            Commands::Tags => self.list_tags().await,
            Commands::Reset(args) => self.reset(&args).await,
            Commands::Serve => {
                run_stdio_server(PromptStoreMcpServer::new(self.store.clone()))
                    .await
                    .context("MCP server failed")?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    pub async fn add_prompt(&self, params: &AddPrompt) -> Result<ExitCode> {
        debug!("add: {:?}", params.title);
        self.emit(self.store.add_prompt(params).await)
    }

    pub async fn show_prompt(&self, params: &Id) -> Result<ExitCode> {
        self.emit(self.store.get_prompt(params).await)
    }

    pub async fn update_prompt(&self, params: &UpdatePrompt) -> Result<ExitCode> {
        debug!("update: {}", params.id);
        self.emit(self.store.update_prompt(params).await)
    }

    pub async fn delete_prompt(&self, params: &Id) -> Result<ExitCode> {
        self.emit(self.store.delete_prompt(params).await)
    }

    pub async fn list_prompts(&self, params: &ListPrompts) -> Result<ExitCode> {
        self.emit(self.store.list_prompts(params).await)
    }

    pub async fn search_prompts(&self, params: &SearchPrompts) -> Result<ExitCode> {
        self.emit(self.store.search_prompts(params).await)
    }

    pub async fn filter_by_tags(&self, params: &FilterByTags) -> Result<ExitCode> {
        self.emit(self.store.filter_by_tags(params).await)
    }

    pub async fn list_tags(&self) -> Result<ExitCode> {
        self.emit(self.store.list_tags().await)
    }

    async fn reset(&self, args: &ResetArgs) -> Result<ExitCode> {
        if !args.confirm {
            bail!("Refusing to delete every prompt without --confirm");
        }

        self.store
            .reset()
            .await
            .context("Failed to reset prompt store")?;

        if self.json {
            self.print_json(&serde_json::json!({ "reset": true }))?;
        } else {
            self.renderer.render("Prompt store reset.\n")?;
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Prints a successful payload, or the error response of a typed
    /// failure.
    fn emit<T>(&self, result: prompt_store_core::Result<T>) -> Result<ExitCode>
    where
        T: Serialize + Display,
    {
        match result {
            Ok(value) => {
                if self.json {
                    self.print_json(&value)?;
                } else {
                    self.renderer.render(&value.to_string())?;
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                let Some(response) = e.to_response() else {
                    return Err(anyhow::Error::new(e).context("Prompt store operation failed"));
                };
                if self.json {
                    self.print_json(&response)?;
                } else {
                    self.renderer.render_error(&response.to_string())?;
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        self.renderer.render_raw(&json)
    }
}
