//! High-level async API for the prompt store.
//!
//! [`PromptStore`] is the entry point callers use. It checks pagination
//! windows, hands everything else to the storage layer (which normalizes and
//! validates titles, content and tags before touching the database), and runs
//! the blocking SQLite work on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PromptStore   │    │ StorageManager  │    │    Database     │
//! │ (prompt_ops,    │───▶│ (open / reset / │───▶│ (validation +   │
//! │  tag_ops)       │    │  close / inject)│    │  SQL, via db/)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Async facade         Handle lifecycle       Data persistence
//! ```
//!
//! # Usage
//!
//! ```rust
//! use prompt_store_core::{params::{AddPrompt, Id}, PromptStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PromptStoreBuilder::new().in_memory().build()?;
//!
//! let created = store
//!     .add_prompt(&AddPrompt {
//!         title: "Code review".to_string(),
//!         content: "Review this diff for correctness.".to_string(),
//!         tags: vec!["Review".to_string()],
//!     })
//!     .await?;
//!
//! let prompt = store.get_prompt(&Id { id: created.id }).await?;
//! assert_eq!(prompt.tags, vec!["review"]);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StoreError},
    storage::{StorageManager, StorageState},
};

pub mod builder;
pub mod prompt_ops;
pub mod tag_ops;


pub use builder::PromptStoreBuilder;

/// Main interface for managing prompts and tags.
#[derive(Clone)]
pub struct PromptStore {
    pub(crate) storage: Arc<StorageManager>,
}

impl PromptStore {
    pub(crate) fn new(storage: StorageManager) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// The storage manager backing this store.
    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    /// Opens the database now instead of on first use.
    pub async fn open(&self) -> Result<()> {
        self.blocking(|storage| storage.open()).await
    }

    /// Destroys every prompt and tag and starts from an empty store.
    pub async fn reset(&self) -> Result<()> {
        self.blocking(|storage| storage.reset()).await
    }

    /// Flushes and releases the database handle.
    pub async fn close(&self) -> Result<()> {
        self.blocking(|storage| storage.close()).await
    }

    /// Current lifecycle state of the storage handle.
    pub fn state(&self) -> Result<StorageState> {
        self.storage.state()
    }

    /// Runs a lifecycle call on the blocking pool.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorageManager) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        task::spawn_blocking(move || f(&storage))
            .await
            .map_err(|e| StoreError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Runs a database operation on the blocking pool against the shared
    /// handle.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.blocking(move |storage| storage.with_database(f)).await
    }
}
