//! Prompt Store CLI Application
//!
//! Command-line interface and MCP server for a tagged prompt library.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use prompt_store_core::{params::ListPrompts, PromptStoreBuilder};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        reset,
        command,
    } = Args::parse();

    let store = PromptStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize prompt store")?;

    if reset {
        store
            .reset()
            .await
            .context("Failed to reset prompt store")?;
    }

    let renderer = TerminalRenderer::new(!no_color);

    info!("Prompt store started");

    let cli = Cli::new(store.clone(), renderer, json);
    let status = match command {
        Some(command) => cli.run(command).await?,
        None => cli.list_prompts(&ListPrompts::default()).await?,
    };

    store
        .close()
        .await
        .context("Failed to close prompt store")?;

    Ok(status)
}
