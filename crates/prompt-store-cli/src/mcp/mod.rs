//! MCP server implementation for the prompt store
//!
//! This module implements the Model Context Protocol server, exposing the
//! prompt library to AI assistants as a set of tools over stdio.

use anyhow::{Context, Result};
use log::{debug, error, info};
use prompt_store_core::PromptStore;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    AddPrompt, FilterByTags, Id, ListPrompts, McpResult, SearchPrompts, UpdatePrompt,
};

/// MCP server for the prompt store
#[derive(Clone)]
pub struct PromptStoreMcpServer {
    store: PromptStore,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PromptStoreMcpServer {
    /// Create a new prompt store MCP server
    pub fn new(store: PromptStore) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone())
    }

    #[tool(
        name = "add_prompt",
        description = "Save a new reusable prompt. Requires a unique title (1-200 characters) and non-empty content. Optional tags may use letters, numbers, dash and underscore and are stored lowercase. Returns the new prompt's id, title and created_at."
    )]
    async fn add_prompt(&self, params: Parameters<AddPrompt>) -> McpResult {
        self.handlers().add_prompt(params).await
    }

    #[tool(
        name = "get_prompt",
        description = "Retrieve one prompt by id with its full content, tags and timestamps."
    )]
    async fn get_prompt(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().get_prompt(params).await
    }

    #[tool(
        name = "update_prompt",
        description = "Replace a prompt's title, content and tags. This is a full replacement: tags not listed are removed from the prompt. The title must stay unique. Returns the id, title and new updated_at."
    )]
    async fn update_prompt(&self, params: Parameters<UpdatePrompt>) -> McpResult {
        self.handlers().update_prompt(params).await
    }

    #[tool(
        name = "delete_prompt",
        description = "Permanently delete a prompt by id. Its tags remain available for other prompts. This operation cannot be undone."
    )]
    async fn delete_prompt(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_prompt(params).await
    }

    #[tool(
        name = "list_prompts",
        description = "List prompts, most recently updated first. Each entry has a content snippet of up to 200 characters. Use limit (1-100, default 10) and offset (default 0) to page; has_more tells whether another page exists."
    )]
    async fn list_prompts(&self, params: Parameters<ListPrompts>) -> McpResult {
        self.handlers().list_prompts(params).await
    }

    #[tool(
        name = "search_prompts",
        description = "Find prompts whose title or content contains the query, ignoring case. Results are paged like list_prompts. An empty query matches every prompt."
    )]
    async fn search_prompts(&self, params: Parameters<SearchPrompts>) -> McpResult {
        self.handlers().search_prompts(params).await
    }

    #[tool(
        name = "filter_by_tags",
        description = "List prompts that carry any of the given tags (at least one tag is required). Each prompt appears once even when it matches several tags. Results are paged like list_prompts."
    )]
    async fn filter_by_tags(&self, params: Parameters<FilterByTags>) -> McpResult {
        self.handlers().filter_by_tags(params).await
    }

    #[tool(
        name = "list_tags",
        description = "List every tag in alphabetical order with the number of prompts using it. Tags no prompt uses any more are included with a count of 0."
    )]
    async fn list_tags(&self) -> McpResult {
        self.handlers().list_tags().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PromptStoreMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "prompt-store".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Prompt Store is a personal library of reusable text prompts.

## Core Concepts
- **Prompts**: a unique title, the prompt content, tags and created/updated timestamps
- **Tags**: lowercase labels (letters, numbers, dash, underscore) shared between prompts

## Workflow Examples

### Saving a Prompt
1. Use `search_prompts` or `list_tags` to check whether a similar prompt already exists
2. Save it with `add_prompt`, giving it a descriptive title and a few tags

### Finding a Prompt
1. Use `filter_by_tags` to narrow down by topic, or `search_prompts` for a phrase
2. Fetch the full content with `get_prompt`; listings only include a snippet

### Maintaining the Library
- `update_prompt` replaces title, content and tags in one call, so pass the complete tag set
- `delete_prompt` removes a prompt permanently

## Results
Every tool returns JSON. Failures are returned as `{"error": {"code", "message"}}` with one of the codes NOT_FOUND, DUPLICATE_TITLE, INVALID_TITLE, INVALID_TAG or INVALID_INPUT."#.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
///
/// The storage handle is closed before returning, whether the client
/// disconnected or the process received SIGINT or SIGTERM.
pub async fn run_stdio_server(server: PromptStoreMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting prompt store MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let store = server.store.clone();
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

    store
        .close()
        .await
        .context("Failed to close prompt store")?;

    info!("MCP server shutdown complete");
    Ok(())
}
