//! Core library for the prompt store.
//!
//! This crate provides a persistent, tagged library of short text prompts on
//! top of SQLite: input validation, the storage lifecycle, the entity
//! operations, data models and the error taxonomy exposed to callers.
//!
//! # Layers
//!
//! - [`validation`]: pure normalization and validation of titles, tags and
//!   pagination
//! - [`db`]: the schema and one method per entity operation on a single
//!   SQLite connection
//! - [`storage`]: the process-wide handle with its open / reset / close
//!   lifecycle and an injection seam for tests
//! - [`store`]: the async [`PromptStore`] facade used by the CLI and the MCP
//!   server
//!
//! # Quick Start
//!
//! ```rust
//! use prompt_store_core::{
//!     params::{AddPrompt, FilterByTags},
//!     PromptStoreBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PromptStoreBuilder::new()
//!     .with_database_path(Some("prompts.db"))
//!     .build()?;
//!
//! let created = store
//!     .add_prompt(&AddPrompt {
//!         title: "Commit message".to_string(),
//!         content: "Write a conventional commit message for this diff.".to_string(),
//!         tags: vec!["Git".to_string(), "writing".to_string()],
//!     })
//!     .await?;
//! println!("{created}");
//!
//! let tagged = store.filter_by_tags(&FilterByTags::new(["git"])).await?;
//! for prompt in &tagged.page.prompts {
//!     println!("{}: {}", prompt.title, prompt.snippet);
//! }
//!
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use db::Database;
pub use display::LocalDateTime;
pub use error::{ErrorCode, ErrorResponse, Result, StoreError};
pub use models::{
    CreatedPrompt, DeletedPrompt, Prompt, PromptPage, PromptSummary, SearchResults,
    TagFilterResults, TagList, TagUsage, UpdatedPrompt,
};
pub use params::{
    AddPrompt, DeletePrompt, FilterByTags, GetPrompt, Id, ListPrompts, SearchPrompts, UpdatePrompt,
};
pub use storage::{StorageLocation, StorageManager, StorageState};
pub use store::{PromptStore, PromptStoreBuilder};
pub use validation::Pagination;
